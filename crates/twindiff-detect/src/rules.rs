//! Built-in detection rules, highest priority first.
//!
//! Order matters: the first rule whose pattern matches wins. Rules keyed on
//! distinctive markers (shebangs, XML prologs) come first. Rust precedes
//! C++ since `std::` paths appear in both. TypeScript precedes JavaScript
//! since TypeScript markers are also plausible JavaScript, and JavaScript
//! precedes Python because of the shared `import` keyword. Loose formats
//! (Markdown, YAML) come last.
//!
//! Formatter identifiers name the parser an external code formatter should
//! use for the language. Languages without a supported formatter have none.

/// Language reported when no rule matches.
pub const PLAINTEXT: &str = "plaintext";

/// Formatter reported alongside [`PLAINTEXT`].
pub const DEFAULT_FORMATTER: &str = "plaintext";

/// `(pattern, language, formatter)` triples in priority order.
pub(crate) const BUILTIN_RULES: &[(&str, &str, Option<&str>)] = &[
    (r"\A#!.*\bpython[0-9.]*\b", "python", None),
    (r"\A#!.*\b(?:ba|z|k)?sh\b", "shell", None),
    (r"\A\s*<\?xml\b", "xml", None),
    (
        r"(?i)\A\s*(?:<!doctype\s+html|<html\b|<head\b|<body\b)",
        "html",
        Some("html"),
    ),
    (
        r#"\A\s*(?:\{\s*"[^"\n]*"\s*:|\{\s*\}\s*\z|\[\s*(?:[\{\["\d-]|true\b|false\b|null\b|\]))"#,
        "json",
        Some("json"),
    ),
    (
        r"(?m)^\s*(?:pub(?:\([\w:]+\))?\s+(?:fn|struct|enum|mod|trait|use)\b|use\s+\w+(?:::[\w{}*, ]+)+;|fn\s+\w+\s*[<(]|impl(?:<[^>]*>)?\s+[\w:<>]+)|\blet\s+mut\b",
        "rust",
        None,
    ),
    (
        r"(?m)^\s*(?:#\s*include\s*[<\x22]|(?:int|void)\s+main\s*\()|\bstd::\w+",
        "cpp",
        None,
    ),
    (
        r"(?m)^package\s+\w+\s*$|^func\s+(?:\(\w+\s+\*?\w+\)\s*)?\w+\s*\(",
        "go",
        None,
    ),
    (
        r"(?m)^\s*(?:import\s+java\.|package\s+[\w.]+;|public\s+(?:final\s+|abstract\s+)?(?:class|interface|enum)\b)",
        "java",
        None,
    ),
    (
        r"(?m)^\s*(?:export\s+)?(?:interface\s+\w+|type\s+\w+\s*=|enum\s+\w+\s*\{)|\w+\??\s*:\s*(?:string|number|boolean|any|void|unknown)\b",
        "typescript",
        Some("typescript"),
    ),
    (
        r#"(?m)^\s*(?:import\s+(?:[\w*{}\s,]+\s+from\s+)?['"]|export\s+(?:default\b|const\b|function\b|class\b|\{)|(?:const|let|var)\s+[\w{}\[\],\s]+=|function\s*\*?\s*\w*\s*\(|module\.exports\b)|\brequire\(\s*['"]"#,
        "javascript",
        Some("babel"),
    ),
    (
        r"(?m)^\s*(?:def\s+\w+\s*\(|class\s+\w+\s*(?:\([^)]*\))?\s*:|from\s+[\w.]+\s+import\b|import\s+[\w.]+(?:\s+as\s+\w+)?\s*$|if\s+__name__\s*==|elif\b.*:\s*$)",
        "python",
        None,
    ),
    (
        r"(?m)^\s*[.#]?[\w-]+(?:[\s>+~,.#:]+[\w-]+)*\s*\{\s*\n\s*[\w-]+\s*:\s*[^;\n]+;",
        "css",
        Some("css"),
    ),
    (
        r"(?im)^\s*(?:select\s+.+\s+from\b|insert\s+into\b|update\s+\w+\s+set\b|delete\s+from\b|create\s+(?:table|index|view)\b)",
        "sql",
        None,
    ),
    (
        r"(?m)^(?:#{1,6}\s+\S|```|\s*[-*+]\s+\[[ xX]\]\s)|\[[^\]\n]+\]\([^)\n]+\)",
        "markdown",
        Some("markdown"),
    ),
    (
        r"(?m)\A---[ \t]*$|^[\w-]+:[ \t]+\S.*\n(?:[ \t]+)?[\w-]+:",
        "yaml",
        Some("yaml"),
    ),
];
