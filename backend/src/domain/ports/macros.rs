//! `define_port_error!` declares the error enum of a driven port.
//!
//! Variants use named fields and a display template. For `Read { message }`
//! the macro also emits `read(message: impl Into<String>)`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreLockError {
            Held { path: String, pid: u32 } => "contact store {path} is locked by process {pid}",
            Stale { path: String } => "stale lock on contact store {path}",
        }
    }

    #[test]
    fn constructor_widens_numeric_fields() {
        let err = StoreLockError::held("contacts.json", 7_u16);
        assert_eq!(
            err,
            StoreLockError::Held {
                path: "contacts.json".to_owned(),
                pid: 7,
            }
        );
        assert_eq!(
            err.to_string(),
            "contact store contacts.json is locked by process 7"
        );
    }

    #[test]
    fn constructor_takes_owned_paths() {
        let path = std::path::Path::new("data/contacts.json").display().to_string();
        let err = StoreLockError::stale(path);
        assert_eq!(err.to_string(), "stale lock on contact store data/contacts.json");
    }
}
