use serde::Serialize;

///
/// StructSchema
/// One struct type in the catalog surface: a name and its field set.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct StructSchema {
    pub name: &'static str,
    pub fields: &'static [FieldNode],
}

impl StructSchema {
    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&'static FieldNode> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}

///
/// FieldNode
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldNode {
    pub ident: &'static str,
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// Shape of a field as seen by the path language. Only `Struct` and
/// `StructList` admit descent; `StructList` admits exactly one level into
/// its element type.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum FieldKind {
    /// string → string parameter map; terminal.
    Map,
    /// Scalar leaf (string, bool, int); terminal.
    Scalar,
    /// List of scalars (`values`, `bucketCols`); terminal.
    ScalarList,
    /// Nested struct; a path may end here (prefix expansion) or descend.
    Struct(&'static StructSchema),
    /// List of structs; a path may end here or name one element field.
    StructList(&'static StructSchema),
    /// Not stored on the partition; populated from request context.
    Virtual,
}

impl FieldKind {
    /// Struct type reached by descending through this field, if any.
    #[must_use]
    pub const fn descend(self) -> Option<&'static StructSchema> {
        match self {
            Self::Struct(s) | Self::StructList(s) => Some(s),
            Self::Map | Self::Scalar | Self::ScalarList | Self::Virtual => None,
        }
    }
}
