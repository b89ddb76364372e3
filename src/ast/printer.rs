//! Indented rendering of a parsed program.
//!
//! Each statement becomes one line, nested bodies are indented by two
//! spaces, and expressions are written inline in their fully parenthesized
//! form.

use super::statements::{BlockStmt, Program, Stmt};

struct Printer {
    output: String,
    indent: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        self.output.push_str(&"  ".repeat(self.indent));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, body: &BlockStmt) {
        self.indent += 1;
        for stmt in body.iter() {
            self.stmt(stmt);
        }
        self.indent -= 1;
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(decl) => self.line(&format!(
                "Declaration {}: {} = {}",
                decl.identifier, decl.explicit_type, decl.assigned_value
            )),
            Stmt::Assignment(assignment) => self.line(&format!(
                "Assignment {} = {}",
                assignment.identifier, assignment.value
            )),
            Stmt::Print(print) => self.line(&format!("Print {}", print.value)),
            Stmt::Return(ret) => self.line(&format!("Return {}", ret.value)),
            Stmt::Block(block) => {
                self.line("Block");
                self.nested(block);
            }
            Stmt::If(if_stmt) => {
                self.line(&format!("If {}", if_stmt.condition));
                self.indent += 1;
                self.line("Then");
                self.nested(&if_stmt.then_body);
                if let Some(else_body) = &if_stmt.else_body {
                    self.line("Else");
                    self.nested(else_body);
                }
                self.indent -= 1;
            }
            Stmt::While(while_stmt) => {
                self.line(&format!("While {}", while_stmt.condition));
                self.nested(&while_stmt.body);
            }
            Stmt::FnDecl(function) => {
                let parameters = function
                    .parameters
                    .iter()
                    .map(|(name, ty)| format!("{}: {}", name, ty))
                    .collect::<Vec<_>>()
                    .join(", ");

                self.line(&format!(
                    "FunctionDefinition {}({}): {}",
                    function.identifier, parameters, function.return_type
                ));
                self.nested(&function.body);
            }
        }
    }
}

pub fn pretty_print(program: &Program) -> String {
    let mut printer = Printer {
        output: String::new(),
        indent: 0,
    };

    printer.line("Program");
    printer.indent += 1;
    for stmt in program.iter() {
        printer.stmt(stmt);
    }

    printer.output
}
