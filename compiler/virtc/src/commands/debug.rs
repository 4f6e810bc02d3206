//! Debug commands: `lex` and `parse` for inspecting the front end.

use virt_ir::{StmtKind, StringInterner, Token, TokenKind};

use super::{location, read_file};

/// Render one token with its text resolved through the interner.
pub fn render_token(token: &Token, interner: &StringInterner) -> String {
    let kind = match token.kind {
        TokenKind::Ident(name) => format!("Ident({})", interner.lookup(name)),
        TokenKind::Str(name) => format!("Str({:?})", interner.lookup(name)),
        TokenKind::Number(n) => format!("Number({n})"),
        other => format!("{other:?}"),
    };
    format!("{kind} @ {:?}", token.span)
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    match virt_lexer::lex(&source, &interner) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in tokens.iter() {
                println!("  {}", render_token(token, &interner));
            }
        }
        Err(err) => {
            eprintln!("syntax error: {err}");
            if let Some(at) = location(path, &source, Some(err.span())) {
                eprintln!("  --> {at}");
            }
            std::process::exit(1);
        }
    }
}

/// One-line summary of a top-level statement.
pub fn describe_stmt(kind: &StmtKind, interner: &StringInterner) -> String {
    match kind {
        StmtKind::Expr(_) => "expression".to_string(),
        StmtKind::VarDecl { name, kind, .. } => {
            let keyword = match kind {
                virt_ir::BindingKind::Let => "let",
                virt_ir::BindingKind::Const => "const",
            };
            format!("{keyword} {}", interner.lookup(*name))
        }
        StmtKind::FnDecl(def) => {
            let name = def.name.map_or("<anonymous>", |name| interner.lookup(name));
            let params: Vec<_> = def.params.iter().map(|p| interner.lookup(*p)).collect();
            format!("fn {name}({})", params.join(", "))
        }
        StmtKind::If(stmt) => format!("if ({} else-if)", stmt.else_ifs.len()),
        StmtKind::While { .. } => "while".to_string(),
        StmtKind::TryCatch(stmt) => format!("try/catch {}", interner.lookup(stmt.catch_var)),
        StmtKind::Return(_) => "return".to_string(),
        StmtKind::Break => "break".to_string(),
        StmtKind::Continue => "continue".to_string(),
    }
}

/// Parse a file and display its top-level statements.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    match virt_parse::parse(&source, &interner) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", program.body.len());
            for stmt in &program.body {
                let (line, col) = stmt.span.line_col(&source);
                println!("  {line}:{col} {}", describe_stmt(&stmt.kind, &interner));
            }
        }
        Err(err) => {
            eprintln!("syntax error: {err}");
            if let Some(at) = location(path, &source, Some(err.span())) {
                eprintln!("  --> {at}");
            }
            std::process::exit(1);
        }
    }
}
