use crate::router::Router;

/// Handlers that contribute their own routes when mounted with [`Router::mount`].
///
/// `mount` requires this trait, but only `&'static str` and `String` implement
/// it out of the box. Any other handler type opts in with an empty impl, which
/// keeps the default body and means "no route hook": the mounted handler then
/// acts as a plain [`Router::group`] component.
///
/// ```
/// use bunner_tree_router::{Routable, Router};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Layout;
///
/// impl Routable for Layout {}
///
/// let mut router = Router::new();
/// router.mount(Layout);
/// assert_eq!(router.len(), 1);
/// ```
pub trait Routable: Sized {
    fn configure(&self, router: &mut Router<Self>) {
        let _ = router;
    }
}

impl Routable for &'static str {}

impl Routable for String {}
