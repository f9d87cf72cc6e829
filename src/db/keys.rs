slotmap::new_key_type! {
    /// A key to access a formula stored in a [Registry](crate::db::registry::Registry).
    ///
    /// Keys are handles to nodes, and do not own the node.
    /// A key to a removed node is never reused, and resolves to nothing.
    pub struct FormulaKey;
}
