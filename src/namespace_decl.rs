//! Detection of legacy `pkgutil`-style namespace package declarations.
//!
//! Before PEP 420, a package shared between distributions declared itself
//! with an `__init__.py` along the lines of
//!
//! ```python
//! from pkgutil import extend_path
//! __path__ = extend_path(__path__, __name__)
//! ```
//!
//! The source is parsed and searched structurally, so import aliases and the
//! shape of the call's arguments don't matter. Nothing is executed.

use rustpython_parser::ast;

const PATH_NAME: &str = "__path__";
const EXTEND_PATH: &str = "extend_path";

/// True if `init_source` assigns `__path__` from a call to `extend_path`
/// (by plain name or as the final attribute, e.g. `pkgutil.extend_path`).
///
/// Sources that are not UTF-8 or do not parse are not declarations.
pub fn is_namespace_declaration(init_source: &[u8]) -> bool {
    let Ok(source) = std::str::from_utf8(init_source) else {
        log::debug!("__init__.py is not valid UTF-8; treating as a regular package");
        return false;
    };

    match rustpython_parser::parse(source, rustpython_parser::Mode::Module, "__init__.py") {
        Ok(ast::Mod::Module(module)) => module.body.iter().any(declares_namespace),
        Ok(_) => false,
        Err(e) => {
            log::debug!("Unparseable __init__.py treated as a regular package: {}", e);
            false
        }
    }
}

fn declares_namespace(stmt: &ast::Stmt) -> bool {
    match stmt {
        ast::Stmt::Assign(assign) => is_extend_path_assignment(assign),
        ast::Stmt::FunctionDef(func) => any_declares(&func.body),
        ast::Stmt::AsyncFunctionDef(func) => any_declares(&func.body),
        ast::Stmt::ClassDef(class) => any_declares(&class.body),
        ast::Stmt::If(if_stmt) => any_declares(&if_stmt.body) || any_declares(&if_stmt.orelse),
        ast::Stmt::While(while_stmt) => {
            any_declares(&while_stmt.body) || any_declares(&while_stmt.orelse)
        }
        ast::Stmt::For(for_stmt) => any_declares(&for_stmt.body) || any_declares(&for_stmt.orelse),
        ast::Stmt::AsyncFor(for_stmt) => {
            any_declares(&for_stmt.body) || any_declares(&for_stmt.orelse)
        }
        ast::Stmt::With(with_stmt) => any_declares(&with_stmt.body),
        ast::Stmt::AsyncWith(with_stmt) => any_declares(&with_stmt.body),
        ast::Stmt::Match(match_stmt) => match_stmt
            .cases
            .iter()
            .any(|case| any_declares(&case.body)),
        ast::Stmt::Try(try_stmt) => {
            any_declares(&try_stmt.body)
                || try_stmt.handlers.iter().any(handler_declares)
                || any_declares(&try_stmt.orelse)
                || any_declares(&try_stmt.finalbody)
        }
        ast::Stmt::TryStar(try_stmt) => {
            any_declares(&try_stmt.body)
                || try_stmt.handlers.iter().any(handler_declares)
                || any_declares(&try_stmt.orelse)
                || any_declares(&try_stmt.finalbody)
        }
        _ => false,
    }
}

fn any_declares(body: &[ast::Stmt]) -> bool {
    body.iter().any(declares_namespace)
}

fn handler_declares(handler: &ast::ExceptHandler) -> bool {
    let ast::ExceptHandler::ExceptHandler(h) = handler;
    any_declares(&h.body)
}

/// `__path__ = <callee>(...)` with a single plain-name target
fn is_extend_path_assignment(assign: &ast::StmtAssign) -> bool {
    let [ast::Expr::Name(target)] = assign.targets.as_slice() else {
        return false;
    };
    if target.id.as_str() != PATH_NAME {
        return false;
    }

    match &*assign.value {
        ast::Expr::Call(call) => callee_is_extend_path(&call.func),
        _ => false,
    }
}

fn callee_is_extend_path(func: &ast::Expr) -> bool {
    match func {
        ast::Expr::Name(name) => name.id.as_str() == EXTEND_PATH,
        ast::Expr::Attribute(attr) => attr.attr.as_str() == EXTEND_PATH,
        _ => false,
    }
}
