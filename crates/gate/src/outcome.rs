/// Where a redirect outcome sends the client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    AdminHome,
    UserHome,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::AdminHome => "/admin",
            RedirectTarget::UserHome => "/dashboard",
        }
    }
}

/// The decision produced for a single navigation.
///
/// Every evaluation is stateless given its inputs; outcomes are re-derived on
/// each navigation or session change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Session fetch unresolved; render a loading indicator, no content.
    Pending,
    /// Navigate elsewhere instead of rendering.
    Redirect(RedirectTarget),
    /// Session present but role insufficient; render access-denied with a
    /// "go back" affordance.
    Denied,
    /// Render the target view.
    Render,
    /// No registered route matches the path.
    NotFound,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pending => "pending",
            Outcome::Redirect(_) => "redirect",
            Outcome::Denied => "denied",
            Outcome::Render => "render",
            Outcome::NotFound => "not_found",
        }
    }

    /// Redirect location, when the outcome is a redirect.
    pub fn location(&self) -> Option<&'static str> {
        match self {
            Outcome::Redirect(target) => Some(target.path()),
            _ => None,
        }
    }
}
