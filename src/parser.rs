//! Source parser for `.dmodel` files
//!
//! A hand-written lexer and recursive-descent parser that feeds declarations
//! straight into a [`ModelBuilder`]. Several files may be parsed into the same
//! builder; references between them are resolved later by the compiler.
//!
//! # Example
//! ```text
//! // line comment
//! datatype String
//!
//! package blog {
//!     entity Post extends base.Item {
//!         title: String
//!         many tags: String
//!     }
//! }
//! ```

use std::fmt;
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::domain::entities::{DataType, Entity, Feature, Model, ModelBuilder};
use crate::domain::ports::FsError;
use crate::domain::value_objects::{Multiplicity, PackagePath, TypeRef};
use crate::error::{DmodelError, DmodelResult};

/// Extension every source file must carry
pub const FILE_EXTENSION: &str = "dmodel";

/// Reserved words; never valid as names
const KEYWORDS: [&str; 5] = ["datatype", "entity", "extends", "many", "package"];

/// Guard against pathological package nesting
const MAX_PACKAGE_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Ident(String),
    Dot,
    Colon,
    LBrace,
    RBrace,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(word) if KEYWORDS.contains(&word.as_str()) => {
                write!(f, "keyword '{}'", word)
            }
            TokenKind::Ident(word) => write!(f, "'{}'", word),
            TokenKind::Dot => f.write_str("'.'"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::LBrace => f.write_str("'{'"),
            TokenKind::RBrace => f.write_str("'}'"),
            TokenKind::Eof => f.write_str("end of file"),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
}

fn parse_error(file: &Path, line: usize, column: usize, message: impl Into<String>) -> DmodelError {
    DmodelError::Parse {
        file: file.to_path_buf(),
        line,
        column,
        message: message.into(),
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    file: &'a Path,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str, file: &'a Path) -> Self {
        Self {
            chars: source.chars().peekable(),
            file,
            line: 1,
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn tokenize(mut self) -> DmodelResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            let (line, column) = (self.line, self.column);

            let Some(c) = self.chars.peek().copied() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    line,
                    column,
                });
                return Ok(tokens);
            };

            let kind = match c {
                '.' | ':' | '{' | '}' => {
                    self.bump();
                    match c {
                        '.' => TokenKind::Dot,
                        ':' => TokenKind::Colon,
                        '{' => TokenKind::LBrace,
                        _ => TokenKind::RBrace,
                    }
                }
                c if is_ident_start(c) => {
                    let mut word = String::new();
                    while let Some(c) = self.chars.peek().copied() {
                        if !is_ident_continue(c) {
                            break;
                        }
                        word.push(c);
                        self.bump();
                    }
                    TokenKind::Ident(word)
                }
                other => {
                    return Err(parse_error(
                        self.file,
                        line,
                        column,
                        format!("unexpected character '{}'", other.escape_debug()),
                    ));
                }
            };

            tokens.push(Token { kind, line, column });
        }
    }

    /// Skip whitespace, `// line` and `/* block */` comments
    fn skip_trivia(&mut self) -> DmodelResult<()> {
        loop {
            match self.chars.peek().copied() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.peek().copied() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => self.skip_block_comment()?,
                        // A lone '/' is reported by the tokenizer.
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self) -> DmodelResult<()> {
        let (line, column) = (self.line, self.column);
        self.bump();
        self.bump();

        let mut prev = '\0';
        loop {
            match self.bump() {
                Some('/') if prev == '*' => return Ok(()),
                Some(c) => prev = c,
                None => {
                    return Err(parse_error(
                        self.file,
                        line,
                        column,
                        "unterminated block comment",
                    ))
                }
            }
        }
    }
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    file: &'a Path,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Consume one token; `Eof` is never consumed
    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_at(&self, token: &Token, message: impl Into<String>) -> DmodelError {
        parse_error(self.file, token.line, token.column, message)
    }

    fn unexpected(&self, token: &Token, expected: &str) -> DmodelError {
        self.error_at(token, format!("expected {}, found {}", expected, token.kind))
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(word) if word == keyword)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> DmodelResult<()> {
        let token = self.advance();
        if token.kind == kind {
            Ok(())
        } else {
            Err(self.unexpected(&token, expected))
        }
    }

    fn identifier(&mut self, expected: &str) -> DmodelResult<String> {
        let token = self.advance();
        match token.kind {
            TokenKind::Ident(word) if !KEYWORDS.contains(&word.as_str()) => Ok(word),
            _ => Err(self.unexpected(&token, expected)),
        }
    }

    /// `ID ('.' ID)*`
    fn qualified_name(&mut self, expected: &str) -> DmodelResult<Vec<String>> {
        let mut segments = vec![self.identifier(expected)?];
        while self.peek().kind == TokenKind::Dot {
            self.advance();
            segments.push(self.identifier("identifier after '.'")?);
        }
        Ok(segments)
    }

    /// Elements until end of file (top level) or the closing brace of a package
    fn elements(
        &mut self,
        package: &PackagePath,
        depth: usize,
        builder: &mut ModelBuilder,
    ) -> DmodelResult<()> {
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::Eof if depth == 0 => return Ok(()),
                TokenKind::Eof => {
                    return Err(self.error_at(
                        &token,
                        format!("unclosed package '{}': expected '}}'", package.dotted()),
                    ));
                }
                TokenKind::RBrace if depth > 0 => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Ident(word) if word == "package" => {
                    self.advance();
                    if depth >= MAX_PACKAGE_DEPTH {
                        return Err(self.error_at(&token, "packages nested too deeply"));
                    }
                    let name = self.qualified_name("package name")?;
                    self.expect(TokenKind::LBrace, "'{' after package name")?;
                    let nested = package.join(&PackagePath::from_segments(name));
                    self.elements(&nested, depth + 1, builder)?;
                }
                TokenKind::Ident(word) if word == "datatype" => {
                    self.advance();
                    let name = self.identifier("datatype name")?;
                    builder.add_datatype(DataType::new(package.clone(), name));
                }
                TokenKind::Ident(word) if word == "entity" => {
                    self.advance();
                    let entity = self.entity(package)?;
                    builder.add_entity(entity);
                }
                _ => {
                    return Err(self.unexpected(&token, "'package', 'datatype' or 'entity'"));
                }
            }
        }
    }

    /// `ID ('extends' QN)? '{' Feature* '}'`, after the `entity` keyword
    fn entity(&mut self, package: &PackagePath) -> DmodelResult<Entity> {
        let name = self.identifier("entity name")?;
        let mut entity = Entity::new(package.clone(), name);

        if self.peek_keyword("extends") {
            self.advance();
            let super_type = self.qualified_name("superentity name")?;
            entity = entity.extends(TypeRef::new(super_type.join(".")));
        }

        self.expect(TokenKind::LBrace, "'{' after entity name")?;
        while self.peek().kind != TokenKind::RBrace {
            let feature = self.feature()?;
            entity.push_feature(feature);
        }
        self.advance();

        Ok(entity)
    }

    /// `'many'? ID ':' QN`
    fn feature(&mut self) -> DmodelResult<Feature> {
        let many = self.peek_keyword("many");
        if many {
            self.advance();
        }

        let name = self.identifier("feature name or '}'")?;
        self.expect(TokenKind::Colon, "':' after feature name")?;
        let type_ref = self.qualified_name("type name")?;

        Ok(Feature::new(name, TypeRef::new(type_ref.join(".")))
            .with_multiplicity(Multiplicity::from_many(many)))
    }
}

/// Parse one source text into `builder`
///
/// `file` is only used for error locations.
pub fn parse_str(source: &str, file: &Path, builder: &mut ModelBuilder) -> DmodelResult<()> {
    let tokens = Lexer::new(source, file).tokenize()?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        file,
    };
    parser.elements(&PackagePath::root(), 0, builder)
}

/// Parse a standalone source text into a model
pub fn parse_model(source: &str, file: &Path) -> DmodelResult<Model> {
    let mut builder = ModelBuilder::new();
    parse_str(source, file, &mut builder)?;
    Ok(builder.build()?)
}

/// Reject paths without the `.dmodel` extension
pub fn check_extension(path: &Path) -> DmodelResult<()> {
    if path.extension().and_then(|ext| ext.to_str()) == Some(FILE_EXTENSION) {
        Ok(())
    } else {
        Err(DmodelError::WrongExtension {
            file: path.to_path_buf(),
            expected: FILE_EXTENSION,
        })
    }
}

/// Read and parse one `.dmodel` file into `builder`
pub fn parse_file(path: &Path, builder: &mut ModelBuilder) -> DmodelResult<()> {
    check_extension(path)?;
    let source = fs::read_to_string(path).map_err(|e| DmodelError::Read {
        file: path.to_path_buf(),
        source: FsError::from_io(path, e),
    })?;
    parse_str(&source, path, builder)
}

/// Load every file into a single model
pub fn load_model<P: AsRef<Path>>(paths: &[P]) -> DmodelResult<Model> {
    let mut builder = ModelBuilder::new();
    for path in paths {
        parse_file(path.as_ref(), &mut builder)?;
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CompileError;
    use crate::domain::value_objects::QualifiedName;
    use std::path::PathBuf;

    fn parse(source: &str) -> DmodelResult<Model> {
        parse_model(source, Path::new("test.dmodel"))
    }

    fn entity_names(model: &Model) -> Vec<String> {
        model
            .entities()
            .map(|(_, e)| e.qualified_name().to_string())
            .collect()
    }

    fn location(err: DmodelError) -> (usize, usize, String) {
        match err {
            DmodelError::Parse {
                line,
                column,
                message,
                ..
            } => (line, column, message),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_nested_packages_concatenate() {
        let model = parse(
            "package example.qualifiednames {
                entity E1 {}
                package foo.bar {
                    entity E2 extends E1 {}
                    package baz { entity E3 {} }
                }
            }",
        )
        .unwrap();

        assert_eq!(
            entity_names(&model),
            vec![
                "example.qualifiednames.E1",
                "example.qualifiednames.foo.bar.E2",
                "example.qualifiednames.foo.bar.baz.E3",
            ]
        );
    }

    #[test]
    fn parse_reopened_package_merges() {
        let model = parse(
            "package blog { entity Blog {} }
             package blog { entity Post {} }",
        )
        .unwrap();

        assert_eq!(entity_names(&model), vec!["blog.Blog", "blog.Post"]);
    }

    #[test]
    fn parse_features_with_many_and_qualified_types() {
        let model = parse(
            "entity Post extends base.Item {
                title: String
                many tags: blog.Tag
            }",
        )
        .unwrap();

        let (_, post) = model.entities().next().unwrap();
        assert_eq!(post.super_type().map(TypeRef::as_str), Some("base.Item"));

        let features = post.features();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name(), "title");
        assert_eq!(features[0].multiplicity(), Multiplicity::Single);
        assert_eq!(features[1].type_ref().as_str(), "blog.Tag");
        assert_eq!(features[1].multiplicity(), Multiplicity::Array);
    }

    #[test]
    fn parse_datatypes_in_packages() {
        let model = parse("datatype String package types { datatype Money }").unwrap();

        let names: Vec<QualifiedName> = model.datatypes().map(|(_, d)| d.qualified_name()).collect();
        assert_eq!(
            names,
            vec![
                QualifiedName::new(PackagePath::root(), "String"),
                QualifiedName::new(PackagePath::parse("types"), "Money"),
            ]
        );
    }

    #[test]
    fn parse_ignores_comments() {
        let model = parse(
            "// leading comment
             /* block
                comment */
             entity A { // trailing
                 name /* inline */ : String
             }",
        )
        .unwrap();

        assert_eq!(entity_names(&model), vec!["A"]);
    }

    #[test]
    fn parse_empty_source_is_empty_model() {
        assert!(parse("  // nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn missing_colon_reports_line_and_column() {
        let err = parse("entity Post {\n    title String\n}").unwrap_err();
        assert_eq!(
            location(err),
            (
                2,
                11,
                "expected ':' after feature name, found 'String'".to_string()
            )
        );
    }

    #[test]
    fn unexpected_character_is_rejected() {
        let (line, column, message) = location(parse("entity A { x: Int; }").unwrap_err());
        assert_eq!((line, column), (1, 18));
        assert_eq!(message, "unexpected character ';'");
    }

    #[test]
    fn unterminated_block_comment_points_at_opening() {
        let (line, column, message) = location(parse("entity A {}\n  /* open").unwrap_err());
        assert_eq!((line, column), (2, 3));
        assert_eq!(message, "unterminated block comment");
    }

    #[test]
    fn keywords_are_not_names() {
        let (_, _, message) = location(parse("entity entity {}").unwrap_err());
        assert_eq!(message, "expected entity name, found keyword 'entity'");
    }

    #[test]
    fn unclosed_package_is_rejected() {
        let (_, _, message) = location(parse("package blog { entity A {}").unwrap_err());
        assert_eq!(message, "unclosed package 'blog': expected '}'");
    }

    #[test]
    fn stray_closing_brace_at_top_level_is_rejected() {
        let (_, _, message) = location(parse("entity A {} }").unwrap_err());
        assert_eq!(
            message,
            "expected 'package', 'datatype' or 'entity', found '}'"
        );
    }

    #[test]
    fn deeply_nested_packages_are_rejected() {
        let source = "package p { ".repeat(MAX_PACKAGE_DEPTH + 1);
        let (_, _, message) = location(parse(&source).unwrap_err());
        assert_eq!(message, "packages nested too deeply");
    }

    #[test]
    fn duplicate_declarations_across_sources_fail_on_build() {
        let mut builder = ModelBuilder::new();
        parse_str("package blog { entity Post {} }", Path::new("a.dmodel"), &mut builder).unwrap();
        parse_str("package blog { entity Post {} }", Path::new("b.dmodel"), &mut builder).unwrap();

        let err = builder.build().unwrap_err();
        assert!(matches!(err, CompileError::DuplicateEntityName { .. }));
    }

    #[test]
    fn parse_file_requires_dmodel_extension() {
        let mut builder = ModelBuilder::new();
        let err = parse_file(Path::new("model.txt"), &mut builder).unwrap_err();
        assert!(matches!(err, DmodelError::WrongExtension { .. }));
    }

    #[test]
    fn load_model_reports_missing_file() {
        let err = load_model(&[PathBuf::from("does/not/exist.dmodel")]).unwrap_err();
        assert!(matches!(err, DmodelError::Read { .. }));
    }

    #[test]
    fn load_model_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.dmodel");
        let blog = dir.path().join("blog.dmodel");
        fs::write(&base, "package base { entity Item {} }").unwrap();
        fs::write(&blog, "package blog { entity Post extends base.Item {} }").unwrap();

        let model = load_model(&[base, blog]).unwrap();
        assert_eq!(entity_names(&model), vec!["base.Item", "blog.Post"]);
    }
}
