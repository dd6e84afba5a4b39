// impl_leaf
// copyable scalars that convert straight into a Value
macro_rules! impl_leaf {
    ($($type:ty),* $(,)?) => {
        $(
            impl Flatten for $type {
                fn node(&self) -> Node<'_> {
                    Node::Leaf(Value::from(*self))
                }
            }
        )*
    };
}

// impl_transparent
// smart pointers that always hold a value
macro_rules! impl_transparent {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Flatten + ?Sized> Flatten for $ptr<T> {
                fn node(&self) -> Node<'_> {
                    (**self).node()
                }
            }
        )*
    };
}
