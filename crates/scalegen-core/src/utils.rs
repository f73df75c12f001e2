/// Join words into a PascalCase type identifier.
///
/// Characters that cannot appear in an identifier are dropped, except `[]`
/// which reads as `Slice`. Every word boundary (`_`, `-`, `.`, whitespace,
/// `::`, or a word passed separately) capitalizes the next character; the rest
/// of each word is kept as written, so `AccountId32` survives unchanged.
///
/// # Examples
/// ```
/// use scalegen_core::utils::as_type_name;
/// assert_eq!(as_type_name(&["sp_core", "AccountId32"]), "SpCoreAccountId32");
/// assert_eq!(as_type_name(&["Vec<u8>"]), "Vecu8");
/// assert_eq!(as_type_name(&["TupleOf", "U32", "Bool"]), "TupleOfU32Bool");
/// ```
pub fn as_type_name<S: AsRef<str>>(words: &[S]) -> String {
    let mut result = String::new();
    for word in words {
        let word = word.as_ref().replace("[]", "_Slice_");
        let mut capitalize_next = true;
        for c in word.chars() {
            if !c.is_ascii_alphanumeric() {
                // Brackets and punctuation vanish without starting a new word.
                capitalize_next |= matches!(c, '_' | '-' | '.' | ' ' | ':' | '\t' | '\n');
                continue;
            }
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        }
    }

    if result.is_empty() {
        return "Unnamed".to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, 'T');
    }
    result
}

/// Convert PascalCase, camelCase or mixed input to snake_case.
///
/// Acronyms stay together (`XCMPQueue` → `xcmp_queue`) and anything that is
/// not alphanumeric becomes a single separator.
///
/// # Examples
/// ```
/// use scalegen_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("RemarkWithEvent"), "remark_with_event");
/// assert_eq!(to_snake_case("keep_alive"), "keep_alive");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 && !result.is_empty() && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }
    while result.ends_with('_') {
        result.pop();
    }
    result
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "priv", "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type", "unsafe",
    "use", "where", "while", "yield", "abstract", "become", "do", "final", "macro", "override",
    "typeof", "unsized", "virtual",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Make a snake_case name usable as a Rust field or binding name.
///
/// # Examples
/// ```
/// use scalegen_core::utils::escape_ident;
/// assert_eq!(escape_ident("type"), "r#type");
/// assert_eq!(escape_ident("self"), "self_");
/// assert_eq!(escape_ident("0"), "_0");
/// assert_eq!(escape_ident("dest"), "dest");
/// ```
pub fn escape_ident(name: &str) -> String {
    if name.is_empty() {
        return "_unnamed".to_string();
    }
    if NON_RAW_KEYWORDS.contains(&name) {
        return format!("{name}_");
    }
    if KEYWORDS.contains(&name) {
        return format!("r#{name}");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{name}");
    }
    name.to_string()
}

/// Convert to SCREAMING_SNAKE_CASE for constant names.
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}
