/// Builder setter for an optional field nested in a request struct, such as a
/// query parameter or one field of a partial update.
macro_rules! setter {
    (opt $field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield<T>(mut self, $subfield: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field.$subfield = Some($subfield.into());
            self
        }
    };
}

pub(crate) use setter;
