/// Node data that exposes a comparable label.
///
/// Two nodes are only ever matched against each other when their labels are
/// equal. Data types without a meaningful label can use `()`, which makes
/// every node compatible with every other node.
pub trait Labeled {
    /// The label type compared during matching.
    type Label: Eq + ?Sized;

    /// Returns the label of this node.
    fn label(&self) -> &Self::Label;
}

macro_rules! labeled_by_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Labeled for $ty {
                type Label = $ty;

                fn label(&self) -> &Self::Label {
                    self
                }
            }
        )*
    };
}

labeled_by_self!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

impl Labeled for String {
    type Label = str;

    fn label(&self) -> &Self::Label {
        self.as_str()
    }
}

impl Labeled for &str {
    type Label = str;

    fn label(&self) -> &Self::Label {
        self
    }
}
