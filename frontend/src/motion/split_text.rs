#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    Chars,
    Words,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub text: String,
    /// Seconds before this fragment starts animating.
    pub delay: f64,
    pub is_space: bool,
}

/// Splits `text` into animated fragments. Whitespace runs become single
/// unanimated spaces and don't advance the stagger.
pub fn split(text: &str, mode: SplitMode, stagger: f64, delay: f64) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut index = 0usize;

    for (n, word) in text.split_whitespace().enumerate() {
        if n > 0 {
            fragments.push(Fragment {
                text: " ".to_string(),
                delay: 0.0,
                is_space: true,
            });
        }
        match mode {
            SplitMode::Words => {
                fragments.push(Fragment {
                    text: word.to_string(),
                    delay: delay + index as f64 * stagger,
                    is_space: false,
                });
                index += 1;
            }
            SplitMode::Chars => {
                for ch in word.chars() {
                    fragments.push(Fragment {
                        text: ch.to_string(),
                        delay: delay + index as f64 * stagger,
                        is_space: false,
                    });
                    index += 1;
                }
            }
        }
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_get_increasing_delays() {
        let fragments = split("Your  partner in\ttrucking", SplitMode::Words, 0.05, 0.2);
        let words: Vec<_> = fragments.iter().filter(|f| !f.is_space).collect();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0].text, "Your");
        assert!((words[0].delay - 0.2).abs() < 1e-12);
        assert!((words[3].delay - 0.35).abs() < 1e-12);
        assert_eq!(fragments.iter().filter(|f| f.is_space).count(), 3);
    }

    #[test]
    fn chars_skip_spaces_in_the_stagger() {
        let fragments = split("ab cd", SplitMode::Chars, 0.02, 0.0);
        let texts: Vec<_> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", " ", "c", "d"]);
        assert!((fragments[3].delay - 0.04).abs() < 1e-12);
    }

    #[test]
    fn empty_text_has_no_fragments() {
        assert!(split("   ", SplitMode::Chars, 0.02, 0.0).is_empty());
    }
}
