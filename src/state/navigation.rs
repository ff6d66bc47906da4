use super::data::FoodRecord;

/// A screen on the navigation stack, with its payload
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The gallery; takes no payload
    Home,
    /// One recipe, carried by value
    RecipeDetail(FoodRecord),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::RecipeDetail(_) => "RecipeDetail",
        }
    }
}

/// Screen stack with push/pop
///
/// The root screen is never popped, so there is always a current screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::Home)
    }
}

impl Navigator {
    pub fn new(root: Screen) -> Self {
        Navigator { stack: vec![root] }
    }

    /// Show `screen` on top of the current one
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
        tracing::debug!(
            "Navigate: {} (depth {})",
            self.current().name(),
            self.depth()
        );
    }

    /// Return to the previous screen
    ///
    /// Returns the screen that was removed, or `None` at the root.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }

        let popped = self.stack.pop();
        tracing::debug!("Navigate back to {}", self.current().name());
        popped
    }

    /// The screen currently shown
    pub fn current(&self) -> &Screen {
        // stack always holds the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
