macro_rules! nutype_string {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(String);
    };
    ($ident:ident ( $($args:tt)* )) => {
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize),
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
