//! Token Counting
//!
//! Local token estimation for cost accounting. Counts are computed here for
//! both the rendered prompt and the completion, independently of whatever
//! usage figures a provider reports, so cost accounting stays self-consistent
//! across providers.

/// Token estimation method
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TokenEstimator {
    /// Simple character-based estimation (4 chars = 1 token)
    CharBased,
    /// Word-based estimation (0.75 tokens per word on average)
    WordBased,
    /// Code-aware estimation (accounts for syntax, keywords)
    #[default]
    CodeAware,
}

/// Token counter for cost accounting
pub struct TokenCounter {
    estimator: TokenEstimator,
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new(TokenEstimator::default())
    }
}

impl TokenCounter {
    pub fn new(estimator: TokenEstimator) -> Self {
        Self { estimator }
    }

    /// Estimate token count for a string. Empty input is zero tokens.
    pub fn count(&self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        match self.estimator {
            TokenEstimator::CharBased => self.count_char_based(text),
            TokenEstimator::WordBased => self.count_word_based(text),
            TokenEstimator::CodeAware => self.count_code_aware(text),
        }
    }

    fn count_char_based(&self, text: &str) -> u64 {
        text.chars().count().div_ceil(4) as u64
    }

    fn count_word_based(&self, text: &str) -> u64 {
        let word_count = text.split_whitespace().count();
        (word_count as f32 * 0.75).ceil() as u64 + 1
    }

    /// Code-aware counting: punctuation and operators are individual tokens,
    /// long identifiers split at roughly 4 chars per token.
    fn count_code_aware(&self, text: &str) -> u64 {
        let mut tokens = 0u64;
        let mut current_word = String::new();

        for ch in text.chars() {
            match ch {
                '(' | ')' | '{' | '}' | '[' | ']' | ';' | ':' | ',' | '.' | '+' | '-' | '*'
                | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '@' | '#' | '$' | '%' | '^' | '~'
                | '?' | '\\' => {
                    if !current_word.is_empty() {
                        tokens += estimate_word_tokens(&current_word);
                        current_word.clear();
                    }
                    tokens += 1;
                }
                ' ' | '\t' | '\n' | '\r' => {
                    if !current_word.is_empty() {
                        tokens += estimate_word_tokens(&current_word);
                        current_word.clear();
                    }
                }
                _ => {
                    current_word.push(ch);
                }
            }
        }

        if !current_word.is_empty() {
            tokens += estimate_word_tokens(&current_word);
        }

        tokens.max(1)
    }
}

fn estimate_word_tokens(word: &str) -> u64 {
    let len = word.len();
    if len <= 4 {
        1
    } else if len <= 8 {
        2
    } else {
        len.div_ceil(4) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_based_counting() {
        let counter = TokenCounter::new(TokenEstimator::CharBased);
        assert_eq!(counter.count("hello"), 2); // 5 chars = 2 tokens
        assert_eq!(counter.count("hi"), 1);
        assert_eq!(counter.count("hello world"), 3); // 11 chars = 3 tokens
    }

    #[test]
    fn test_empty_text_zero_tokens() {
        assert_eq!(TokenCounter::default().count(""), 0);
        assert_eq!(TokenCounter::new(TokenEstimator::CharBased).count(""), 0);
    }

    #[test]
    fn test_code_aware_counting() {
        let counter = TokenCounter::new(TokenEstimator::CodeAware);

        let code = "fn main() {}";
        let tokens = counter.count(code);
        assert!(tokens > 0);
        assert!(tokens <= 10);

        let complex = r#"
            export async function getPaginated(req: Request): Promise<Response> {
                const items = await repo.findMany({ take: 20 });
                return json(items);
            }
        "#;
        assert!(counter.count(complex) > tokens);
    }

    #[test]
    fn test_word_based_counting() {
        let counter = TokenCounter::new(TokenEstimator::WordBased);
        assert_eq!(counter.count("one two three four"), 4); // ceil(3.0) + 1
    }
}
