// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subsequence alignment of one query term against one candidate.
//!
//! `dp[i][j]` holds the number of term bytes that must be dropped so that
//! `term[..i]` embeds in `text[..j]`. A term matches when some prefix of the
//! text reaches cost zero; the earliest such prefix is backtraced to recover
//! the matched byte offsets.

/// Align `term` against `text`, ASCII case-insensitively.
///
/// Returns the ascending byte offsets in `text` chosen for each byte of
/// `term`, or `None` when `term` is not a subsequence of `text`. An empty
/// term matches anything with no positions.
pub fn align(term: &str, text: &str) -> Option<Vec<usize>> {
    let term = term.as_bytes();
    let text = text.as_bytes();
    let n = term.len();
    let m = text.len();

    if n == 0 {
        return Some(Vec::new());
    }
    if m == 0 {
        return None;
    }

    let cols = m + 1;
    let mut dp = vec![0u32; (n + 1) * cols];
    for i in 0..=n {
        dp[i * cols] = i as u32;
    }

    for i in 1..=n {
        let t = term[i - 1].to_ascii_lowercase();
        for j in 1..=m {
            dp[i * cols + j] = if t == text[j - 1].to_ascii_lowercase() {
                dp[(i - 1) * cols + j - 1]
            } else {
                let drop_term = dp[(i - 1) * cols + j] + 1;
                let skip_text = dp[i * cols + j - 1];
                drop_term.min(skip_text)
            };
        }
    }

    let last = n * cols;
    let mut min_cost = dp[last];
    let mut best = 0;
    for j in 1..=m {
        if dp[last + j] < min_cost {
            min_cost = dp[last + j];
            best = j;
        }
        if min_cost == 0 {
            break;
        }
    }
    if min_cost != 0 {
        return None;
    }

    Some(backtrace(&dp, cols, term, text, n, best))
}

fn backtrace(
    dp: &[u32],
    cols: usize,
    term: &[u8],
    text: &[u8],
    n: usize,
    end: usize,
) -> Vec<usize> {
    let mut positions = Vec::with_capacity(n);
    let (mut i, mut j) = (n, end);
    while i > 0 && j > 0 {
        if term[i - 1].eq_ignore_ascii_case(&text[j - 1]) {
            positions.push(j - 1);
            i -= 1;
            j -= 1;
        } else if dp[i * cols + j] == dp[(i - 1) * cols + j] + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    positions.reverse();
    positions
}

/// Reference subsequence check used by tests.
#[cfg(test)]
fn is_subsequence(term: &str, text: &str) -> bool {
    let mut rest = text.bytes().map(|b| b.to_ascii_lowercase());
    term.bytes()
        .map(|b| b.to_ascii_lowercase())
        .all(|t| rest.any(|b| b == t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_prefix_positions() {
        assert_eq!(align("abc", "abc"), Some(vec![0, 1, 2]));
        assert_eq!(align("doc", "docker"), Some(vec![0, 1, 2]));
    }

    #[test]
    fn empty_term_matches_with_no_positions() {
        assert_eq!(align("", "docker"), Some(vec![]));
        assert_eq!(align("", ""), Some(vec![]));
    }

    #[test]
    fn empty_text_never_matches_a_term() {
        assert_eq!(align("d", ""), None);
        assert_eq!(align("docker", ""), None);
    }

    #[test]
    fn case_insensitive_both_ways() {
        assert_eq!(align("Docker", "docker run"), Some(vec![0, 1, 2, 3, 4, 5]));
        assert_eq!(align("dock", "DOCKER"), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn scattered_and_missing() {
        assert_eq!(align("dkr", "docker"), Some(vec![0, 3, 5]));
        assert_eq!(align("xyz", "docker run"), None);
        assert_eq!(align("dockerr", "docker"), None);
    }

    #[test]
    fn stops_at_earliest_full_match_and_backtraces_latest_start() {
        // Earliest complete prefix ends at the first 's'; the backtrace then
        // prefers the run closest to that end.
        assert_eq!(align("aws", "cat ~/.aws/config"), Some(vec![7, 8, 9]));
        assert_eq!(align("docker", "sudo docker-compose up"), Some(vec![5, 6, 7, 8, 9, 10]));
    }

    #[test]
    fn positions_are_strictly_increasing_and_in_bounds() {
        let texts = [
            "git log --oneline --graph",
            "kubectl get pods -n ${{namespace}}",
            "aws s3 cp ${{source}} s3://${{bucket}}/${{key}}",
            "a",
            "",
        ];
        let terms = ["g", "gl", "pods", "s3", "cpk", "zz", "a", "--", "{{"];
        for text in texts {
            for term in terms {
                let got = align(term, text);
                assert_eq!(got.is_some(), is_subsequence(term, text), "{term:?} in {text:?}");
                if let Some(positions) = got {
                    assert_eq!(positions.len(), term.len());
                    assert!(positions.windows(2).all(|w| w[0] < w[1]));
                    assert!(positions.iter().all(|&p| p < text.len()));
                    for (t, &p) in term.bytes().zip(&positions) {
                        assert!(t.eq_ignore_ascii_case(&text.as_bytes()[p]));
                    }
                }
            }
        }
    }

    #[test]
    fn control_characters_degrade_to_no_match() {
        assert_eq!(align("\u{7}", "docker run"), None);
    }
}
