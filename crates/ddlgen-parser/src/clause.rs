//! Lexical helpers for `CREATE TABLE` text.
//!
//! Each structural rule of the parser lives in its own function so it can be
//! tested in isolation. None of them allocate a full SQL syntax tree; they
//! operate on slices of the (whitespace-normalized) statement.

use std::sync::LazyLock;

use ddlgen_core::Column;
use regex::Regex;

const IDENT: &str = r#"(?:`[^`]+`|"[^"]+"|'[^']+'|\[[^\]]+\]|[A-Za-z_][A-Za-z0-9_$]*)"#;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static CREATE_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\bCREATE\s+(?:(?:GLOBAL|LOCAL)\s+)?(?:(?:TEMPORARY|TEMP)\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(?:{IDENT}\s*\.\s*)*({IDENT})"
    ))
    .expect("create table pattern")
});

static TABLE_CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:CONSTRAINT|PRIMARY\s+KEY|UNIQUE\s+(?:KEY|INDEX)|KEY|INDEX|FOREIGN\s+KEY|CHECK|FULLTEXT|SPATIAL)\b|UNIQUE\s*\()",
    )
    .expect("table constraint pattern")
});

static PRIMARY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PRIMARY\s+KEY").expect("primary key pattern"));

static TABLE_PRIMARY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PRIMARY\s+KEY\s*\(").expect("table primary key pattern"));

/// Collapse every whitespace run (including newlines) to a single space.
pub fn normalize_whitespace(sql: &str) -> String {
    WHITESPACE.replace_all(sql.trim(), " ").into_owned()
}

/// Remove `-- ...` line comments and `/* ... */` block comments.
///
/// Comment markers inside quoted text are kept. A block comment becomes a
/// single space so the tokens around it stay apart; an unterminated one runs
/// to the end of the input.
pub fn strip_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            out.push(ch);
            continue;
        }
        match (ch, chars.peek()) {
            ('-', Some('-')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            ('\'' | '"' | '`', _) => {
                quote = Some(ch);
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Find `CREATE TABLE <name>` and return the unquoted name plus the text after it.
///
/// `IF NOT EXISTS` and a schema qualifier (`app.users`) are skipped; only the
/// last identifier of a qualified name is returned.
pub fn extract_table_name(sql: &str) -> Option<(&str, &str)> {
    let caps = CREATE_TABLE.captures(sql)?;
    let whole = caps.get(0)?;
    let name = unquote(caps.get(1)?.as_str());
    if name.is_empty() {
        return None;
    }
    Some((name, &sql[whole.end()..]))
}

/// Return the contents of the first balanced `( ... )` span in `s`.
///
/// Parentheses inside quoted text are ignored. `None` when there is no
/// opening parenthesis or it is never closed.
pub fn extract_parenthesized(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (idx, ch) in s[open..].char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[open + 1..open + idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a column block on commas that sit outside parentheses and quotes.
///
/// `a DECIMAL(10,2), b INT` yields two clauses. Clauses are trimmed and empty
/// ones dropped.
pub fn split_top_level(block: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, ch) in block.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&block[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&block[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// True when a clause is a table-level constraint or index rather than a column.
pub fn is_table_constraint(clause: &str) -> bool {
    TABLE_CONSTRAINT.is_match(clause.trim_start())
}

/// True when the clause text mentions `PRIMARY KEY` anywhere.
///
/// This is a plain substring test, so the phrase inside a default value
/// also counts.
pub fn contains_primary_key(clause: &str) -> bool {
    PRIMARY_KEY.is_match(clause)
}

/// Split off the first token of a clause, honouring a quoted identifier.
///
/// Returns the token (quotes kept) and the remainder with leading
/// whitespace removed.
pub fn split_first_token(clause: &str) -> (&str, &str) {
    let clause = clause.trim_start();
    let end = match clause.chars().next() {
        Some(open @ ('`' | '"' | '\'' | '[')) => {
            let close = if open == '[' { ']' } else { open };
            clause[1..].find(close).map_or(clause.len(), |i| i + 2)
        }
        Some(_) => clause.find(char::is_whitespace).unwrap_or(clause.len()),
        None => 0,
    };
    (&clause[..end], clause[end..].trim_start())
}

/// Strip surrounding quote characters (backtick, double, single, brackets).
pub fn unquote(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '`' | '"' | '\'' | '[' | ']'))
}

/// Leading identifier of a raw type token: `VARCHAR(100)` -> `VARCHAR`.
pub fn leading_word(token: &str) -> Option<&str> {
    let end = token
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(token.len());
    let word = &token[..end];
    match word.chars().next() {
        Some(c) if !c.is_ascii_digit() => Some(word),
        _ => None,
    }
}

/// Column names listed in every `PRIMARY KEY (...)` found in the block.
///
/// Names are unquoted, stripped of prefix lengths (`name(10)`) and sort
/// order keywords, and de-duplicated case-insensitively.
pub fn table_primary_key_columns(block: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for m in TABLE_PRIMARY_KEY.find_iter(block) {
        // The match ends on the opening parenthesis.
        let Some(list) = extract_parenthesized(&block[m.end() - 1..]) else {
            continue;
        };
        for part in split_top_level(list) {
            let (token, _) = split_first_token(part);
            let name = unquote(token);
            let name = name.split('(').next().unwrap_or(name).trim();
            if !name.is_empty() && !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Build a column from one column-definition clause.
///
/// The first token is the name, the leading word of the second is the SQL
/// type. `None` when either is missing.
pub fn parse_column_clause(clause: &str) -> Option<Column> {
    let (name_token, rest) = split_first_token(clause);
    let name = unquote(name_token);
    if name.is_empty() {
        return None;
    }
    let (type_token, _) = split_first_token(rest);
    let sql_type = leading_word(type_token)?;
    Some(Column::new(name, sql_type, contains_primary_key(clause)))
}
