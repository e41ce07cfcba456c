use std::cell::{Cell, RefCell};

/// Options for declaration emission
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Emit `import React from "react";` at the top of the document
    pub include_react_import: bool,
    /// Precede each component with a comment naming the chosen strategy
    pub annotate_strategy: bool,
    /// Prop that carries the ref into a generic wrapper component
    pub wrapper_ref_prop: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            include_react_import: true,
            annotate_strategy: true,
            wrapper_ref_prop: forwardkit_core::materializer::DEFAULT_WRAPPER_REF_PROP.to_string(),
        }
    }
}

/// Indentation-aware output buffer
pub struct EmitContext {
    buffer: RefCell<String>,
    indent_level: Cell<usize>,
    pub options: EmitOptions,
}

impl EmitContext {
    pub fn new(options: EmitOptions) -> Self {
        Self {
            buffer: RefCell::new(String::new()),
            indent_level: Cell::new(0),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        let mut buffer = self.buffer.borrow_mut();
        for _ in 0..self.indent_level.get() {
            buffer.push_str("  ");
        }
        buffer.push_str(text);
        buffer.push('\n');
    }

    /// Add several lines at the current indentation
    pub fn add_block(&self, block: &str) {
        for line in block.lines() {
            if line.is_empty() {
                self.add("\n");
            } else {
                self.add_line(line);
            }
        }
    }

    pub fn indent(&self) {
        self.indent_level.set(self.indent_level.get() + 1);
    }

    pub fn dedent(&self) {
        self.indent_level.set(self.indent_level.get().saturating_sub(1));
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}
