/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression variants and literals
/// - statements: Definitions for the statement variants and the program root
/// - types: The primitive type annotations
/// - printer: Indented textual rendering of a whole program
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
