//! Edge case tests for litc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Scanner, Token, TokenKind, Unterminated};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::new(TokenKind::Identifier, "x", 1, 0));
    }

    #[test]
    fn test_edge_underscore_alone_is_identifier() {
        let t = lex_all("_");
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("yeet {}", name));
        assert_eq!(t[1].lexeme, name);
        assert_eq!(t[2], Token::eof(1, 10005));
    }

    #[test]
    fn test_edge_dollar_at_end_of_input() {
        let t = lex_all("x $");
        assert_eq!(lexemes(&t), ["x", ""]);
    }

    #[test]
    fn test_edge_quote_at_end_of_input() {
        let err = tokenize("x \"").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedLiteral {
                line: 1,
                column: 2,
                cause: Unterminated::EndOfInput,
            }
        );
    }

    #[test]
    fn test_edge_error_discards_earlier_tokens() {
        // No partial list: the whole call fails.
        assert!(tokenize("fr a cap b \"x").is_err());
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1], Token::new(TokenKind::Identifier, "b", 2, 0));
    }

    #[test]
    fn test_edge_crlf_inside_string_is_unterminated() {
        let err = tokenize("\"abc\r\n\"").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnterminatedLiteral {
                cause: Unterminated::Newline,
                ..
            }
        ));
    }

    #[test]
    fn test_edge_nul_byte_is_unknown() {
        let t = lex_all("a\0b");
        assert_eq!(t[1], Token::new(TokenKind::Unknown, "\0", 1, 1));
        assert_eq!(t[2].lexeme, "b");
    }

    #[test]
    fn test_edge_delete_char_is_unknown() {
        let t = lex_all("\x7F");
        assert_eq!(t[0].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_edge_emoji_is_one_unknown_per_byte() {
        let t = lex_all("😀x");
        assert_eq!(lexemes(&t), ["\u{F0}", "\u{9F}", "\u{98}", "\u{80}", "x", ""]);
        assert!(t[..4].iter().all(|t| t.kind == TokenKind::Unknown));
        assert_eq!(t[3].column, 3);
        assert_eq!(t[4], Token::new(TokenKind::Identifier, "x", 1, 4));
    }

    #[test]
    fn test_edge_unicode_whitespace_is_unknown() {
        // U+00A0 is two bytes in UTF-8
        let t = lex_all("a\u{A0}b");
        assert_eq!(t[1], Token::new(TokenKind::Unknown, "\u{C2}", 1, 1));
        assert_eq!(t[2], Token::new(TokenKind::Unknown, "\u{A0}", 1, 2));
        assert_eq!(t[3], Token::new(TokenKind::Identifier, "b", 1, 3));
    }

    #[test]
    fn test_edge_stray_high_byte_is_unknown() {
        let t = tokenize(&b"a\x80b"[..]).unwrap();
        assert_eq!(t[1], Token::new(TokenKind::Unknown, "\u{80}", 1, 1));
        assert_eq!(t[2], Token::new(TokenKind::Identifier, "b", 1, 2));
    }

    #[test]
    fn test_edge_str_and_bytes_scan_alike() {
        let source = "fr \"naïve\" $ déjà vu\nyeet ü";
        assert_eq!(tokenize(source), tokenize(source.as_bytes()));
    }

    #[test]
    fn test_edge_keyword_glued_to_number() {
        let t = lex_all("fr1 1fr");
        let kinds: Vec<_> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Number,
                TokenKind::Keyword,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_edge_all_punctuation() {
        let source = "!#%&'()*+,-./:;<=>?@[\\]^`{|}~";
        let t = lex_all(source);
        assert_eq!(t.len(), source.len() + 1);
        assert!(t[..source.len()].iter().all(|t| t.kind == TokenKind::Symbol));
    }

    #[test]
    fn test_edge_exactly_one_eof() {
        let t = lex_all("fr x { yeet 1 } cap { yeet 2 }");
        let eofs = t.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1);
        assert!(t.last().is_some_and(Token::is_eof));
    }

    #[test]
    fn test_edge_independent_scanners_in_parallel() {
        let sources = ["fr a", "cap b", "yeet \"c\"", "1 + 2"];
        let handles: Vec<_> = sources
            .iter()
            .map(|&s| std::thread::spawn(move || tokenize(s)))
            .collect();
        for (handle, source) in handles.into_iter().zip(sources) {
            assert_eq!(handle.join().unwrap(), Scanner::new(source).tokenize());
        }
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_identifier_runs() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,60}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            let expected = match input.as_str() {
                "fr" | "cap" | "yeet" => TokenKind::Keyword,
                _ => TokenKind::Identifier,
            };
            prop_assert_eq!(tokens[0].kind, expected);
            prop_assert_eq!(&tokens[0].lexeme, &input);
        });
    }

    #[test]
    fn test_property_digit_runs() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            prop_assert_eq!(&tokens[0].lexeme, &input);
        });
    }

    #[test]
    fn test_property_string_bodies() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"\\n]{0,80}")| {
            let source = format!("\"{}\"", body);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
            prop_assert_eq!(&tokens[0].lexeme, &body);
        });
    }

    #[test]
    fn test_property_never_fails_without_quotes() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"]{0,200}")| {
            let tokens = tokenize(&input);
            prop_assert!(tokens.is_ok());
            let tokens = tokens.unwrap();
            prop_assert!(tokens.last().is_some_and(Token::is_eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        });
    }

    #[test]
    fn test_property_arbitrary_bytes_without_quotes() {
        use proptest::prelude::*;

        let no_quote = any::<u8>().prop_filter("no quote", |b| *b != b'"');
        proptest!(|(input in proptest::collection::vec(no_quote, 0..200))| {
            let tokens = tokenize(&input);
            prop_assert!(tokens.is_ok());
            let tokens = tokens.unwrap();
            prop_assert!(tokens.last().is_some_and(Token::is_eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        });
    }

    #[test]
    fn test_property_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            prop_assert_eq!(tokenize(&input), tokenize(&input));
        });
    }

    #[test]
    fn test_property_comment_elision() {
        use proptest::prelude::*;

        proptest!(|(comment in "[^\\n]{0,40}")| {
            let plain = lex_all("fr a\nyeet b");
            let commented = lex_all(&format!("fr a ${}\nyeet b", comment));
            prop_assert_eq!(plain, commented);
        });
    }

    #[test]
    fn test_property_positions_are_monotonic() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \\n+=;]{0,120}")| {
            let tokens = lex_all(&input);
            for pair in tokens.windows(2) {
                prop_assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
            }
        });
    }
}
