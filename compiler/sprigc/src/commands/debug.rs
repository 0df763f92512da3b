//! `sprig lex`: the token stream of a file.

use sprig_lexer::tokenize;

use super::read_file;

pub fn lex_file(path: &str) -> i32 {
    let Some(content) = read_file(path) else {
        return 1;
    };
    match tokenize(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                println!("  {} @ {}..{}", token.value, token.span.start, token.span.end);
            }
            0
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            1
        }
    }
}
