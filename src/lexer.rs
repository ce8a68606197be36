use crate::prelude::{Token, TokenType};

/// Byte-oriented scanner producing one token per `next_token` call.
#[derive(Debug)]
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut lexer = Self {
            input: source.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let offset = self.position;
        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenType::Eq, "==", offset)
                } else {
                    Token::new(TokenType::Assign, "=", offset)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenType::NotEq, "!=", offset)
                } else {
                    Token::new(TokenType::Bang, "!", offset)
                }
            }
            b'+' => Token::new(TokenType::Plus, "+", offset),
            b'-' => Token::new(TokenType::Minus, "-", offset),
            b'*' => Token::new(TokenType::Asterisk, "*", offset),
            b'/' => Token::new(TokenType::Slash, "/", offset),
            b'%' => Token::new(TokenType::Modulo, "%", offset),
            b'<' => Token::new(TokenType::Lt, "<", offset),
            b'>' => Token::new(TokenType::Gt, ">", offset),
            b',' => Token::new(TokenType::Comma, ",", offset),
            b';' => Token::new(TokenType::Semicolon, ";", offset),
            b':' => Token::new(TokenType::Colon, ":", offset),
            b'?' => Token::new(TokenType::QMark, "?", offset),
            b'(' => Token::new(TokenType::LeftParen, "(", offset),
            b')' => Token::new(TokenType::RightParen, ")", offset),
            b'{' => Token::new(TokenType::LeftBrace, "{", offset),
            b'}' => Token::new(TokenType::RightBrace, "}", offset),
            b'[' => Token::new(TokenType::LeftBracket, "[", offset),
            b']' => Token::new(TokenType::RightBracket, "]", offset),
            b'"' => {
                // An unterminated string still carries the bytes read so far,
                // so the parser can mention them.
                let (literal, terminated) = self.read_string();
                let token_type = if terminated {
                    TokenType::StringLiteral
                } else {
                    TokenType::Illegal
                };
                Token {
                    token_type,
                    literal,
                    offset,
                }
            }
            0 => return Token::new(TokenType::EOF, "", offset),
            c if is_letter(c) => {
                let literal = self.read_identifier();
                let token_type = lookup_keyword(&literal);
                return Token {
                    token_type,
                    literal,
                    offset,
                };
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_number();
                return Token {
                    token_type: TokenType::Int,
                    literal,
                    offset,
                };
            }
            c => Token {
                token_type: TokenType::Illegal,
                literal: String::from_utf8_lossy(&[c]).into_owned(),
                offset,
            },
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        self.ch = *self.input.get(self.read_position).unwrap_or(&0);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        *self.input.get(self.read_position).unwrap_or(&0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Reads a string literal body, translating the recognized escapes.
    /// Returns the post-escape contents and whether the closing quote was
    /// found before end of input.
    fn read_string(&mut self) -> (String, bool) {
        let mut buf = Vec::new();
        loop {
            self.read_char();
            match self.ch {
                b'"' => return (String::from_utf8_lossy(&buf).into_owned(), true),
                0 => return (String::from_utf8_lossy(&buf).into_owned(), false),
                b'\\' => match self.peek_char() {
                    b'"' => {
                        self.read_char();
                        buf.push(b'"');
                    }
                    b'\\' => {
                        self.read_char();
                        buf.push(b'\\');
                    }
                    b'n' => {
                        self.read_char();
                        buf.push(b'\n');
                    }
                    b'r' => {
                        self.read_char();
                        buf.push(b'\r');
                    }
                    b't' => {
                        self.read_char();
                        buf.push(b'\t');
                    }
                    // Unknown escapes pass through as the two raw bytes.
                    _ => buf.push(b'\\'),
                },
                c => buf.push(c),
            }
        }
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn lookup_keyword(text: &str) -> TokenType {
    match text {
        "fn" => TokenType::Function,
        "let" => TokenType::Let,
        "true" => TokenType::True,
        "false" => TokenType::False,
        "if" => TokenType::If,
        "else" => TokenType::Else,
        "return" => TokenType::Return,
        _ => TokenType::Ident,
    }
}
