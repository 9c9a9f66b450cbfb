mod bound_nodes;
mod syntax_nodes;
#[cfg(test)]
mod tests;

pub use self::bound_nodes::bound_node_as_code;
pub use self::syntax_nodes::{syntax_tree_to_string, token_to_string};

/// Switches for printing the intermediate results of each stage to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFlags {
    pub print_tokens: bool,
    pub print_syntax_tree: bool,
    pub print_bound_tree: bool,
}

#[derive(Clone, Debug, Default)]
struct DebugPrinter {
    indent: String,
}

impl DebugPrinter {
    fn child(&self, is_last: bool) -> Self {
        let connector = if is_last { "    " } else { "│   " };
        Self {
            indent: format!("{}{}", self.indent, connector),
        }
    }
}
