use crate::error::{Error, Result};

/// A last-in, first-out stack of values.
#[derive(Clone, Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top of the stack, failing with [`Error::EmptyStack`] if there is
    /// nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// The top of the stack, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// How many values are on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
