/// Lifecycle flag that keeps a component invisible until its first
/// client-side pass has completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountGuard {
    #[default]
    Pending,
    Mounted,
}

impl MountGuard {
    pub fn mark_mounted(&mut self) {
        if *self == MountGuard::Pending {
            tracing::debug!("component mounted");
        }
        *self = MountGuard::Mounted;
    }

    /// Runs `view` only once mounted. `view` is not called before that.
    pub fn render<T>(&self, view: impl FnOnce() -> T) -> Option<T> {
        match self {
            MountGuard::Pending => None,
            MountGuard::Mounted => Some(view()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn renders_nothing_before_mount() {
        let guard = MountGuard::default();
        let calls = Cell::new(0);
        for _ in 0..3 {
            let out = guard.render(|| calls.set(calls.get() + 1));
            assert!(out.is_none());
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn renders_after_mount() {
        let mut guard = MountGuard::default();
        guard.mark_mounted();
        guard.mark_mounted();
        assert_eq!(guard, MountGuard::Mounted);
        assert_eq!(guard.render(|| "dialog"), Some("dialog"));
    }
}
