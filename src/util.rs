/// What happened when a subtree was asked to remove a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RemoveResult {
    /// The search fell off the bottom of the subtree so nothing was removed.
    NotFound,
    /// The `Node` returning this matched and has at most one child. Its parent must unlink it,
    /// splicing that child (if any) into its place.
    RemoveSelf,
    /// A node somewhere below was removed and the links have already been fixed up.
    Removed,
}
