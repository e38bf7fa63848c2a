/// A terminal the host owns. The runner only writes text into it.
pub trait Terminal {
    /// False once the underlying terminal process has exited.
    fn is_alive(&self) -> bool;
    fn clear(&mut self);
    fn send_text(&mut self, text: &str);
}

/// Lazily created terminal handle: reused while alive, recreated once it has exited.
pub struct TerminalSlot<T> {
    handle: Option<T>,
    factory: Box<dyn FnMut() -> T>,
}

impl<T> std::fmt::Debug for TerminalSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSlot")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl<T: Terminal> TerminalSlot<T> {
    pub fn new(factory: impl FnMut() -> T + 'static) -> Self {
        Self {
            handle: None,
            factory: Box::new(factory),
        }
    }

    pub fn acquire(&mut self) -> &mut T {
        let dead = self.handle.as_ref().map_or(true, |t| !t.is_alive());
        if dead {
            tracing::debug!("creating terminal");
            self.handle = Some((self.factory)());
        }
        self.handle.get_or_insert_with(&mut self.factory)
    }
}
