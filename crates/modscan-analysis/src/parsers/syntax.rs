//! Typed view of a module's top-level statements.
//!
//! Only the node kinds discovery consults get their own variant; everything
//! else collapses into an `Other` variant. Nested blocks are never lowered.

/// A parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleAst {
    /// Value of the leading string-literal statement, escapes evaluated,
    /// otherwise untouched.
    pub docstring: Option<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `a = v` or chained `a = b = v` (one target per `=`).
    Assign { targets: Vec<Target>, value: Expr },
    /// `a: T` or `a: T = v`.
    AnnAssign { target: Target, value: Option<Expr> },
    /// `import a.b as c, d`
    Import { names: Vec<Alias> },
    /// `from m import a as b`; `module` is `None` for a bare relative import.
    ImportFrom {
        module: Option<String>,
        names: Vec<Alias>,
    },
    FunctionDef { name: String },
    ClassDef { name: String },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Name(String),
    /// Subscript, attribute, starred or unpacking target.
    Other,
}

impl Target {
    pub fn is_name(&self, id: &str) -> bool {
        matches!(self, Target::Name(name) if name == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Imported name as written (`a.b` for `import a.b`).
    pub name: String,
    pub asname: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Tuple,
    Set,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A string literal, implicit concatenation already applied.
    Str(String),
    Collection {
        kind: CollectionKind,
        elements: Vec<Expr>,
    },
    /// Anything else, tagged with its grammar kind (`integer`, `call`,
    /// `bytes`, `f-string`, ...).
    Other { kind: &'static str },
}

impl Expr {
    /// Short description used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Str(_) => "string",
            Expr::Collection {
                kind: CollectionKind::List,
                ..
            } => "list",
            Expr::Collection {
                kind: CollectionKind::Tuple,
                ..
            } => "tuple",
            Expr::Collection {
                kind: CollectionKind::Set,
                ..
            } => "set",
            Expr::Other { kind } => kind,
        }
    }
}
