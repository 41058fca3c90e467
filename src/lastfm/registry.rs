//! Method registry and binding generator
//!
//! The method table is plain data handed to `lastfm_methods!`. One
//! invocation expands to the static [`METHODS`] table and to one typed
//! `async fn` per entry on [`LastfmClient`](crate::lastfm::LastfmClient).
//!
//! Table entry grammar:
//!
//! ```text
//! /// docs
//! fn binding_name = "group"."name" {
//!     auth: None | Required | SessionBootstrap,
//!     required: [param, ...],
//!     optional: ["param" => Absent | Username | Value("literal"), ...],
//!     select: ["selector", ...],
//! }
//! ```
//!
//! Required parameters are identifiers: they name both the Rust argument and
//! the wire parameter.

use crate::core::types::MethodDescriptor;

pub use super::methods::METHODS;

macro_rules! method_descriptor {
    (
        $group:literal, $name:literal, $auth:ident,
        [$($req:ident),*],
        [$($opt:literal => $kind:ident $(($value:literal))?),*],
        [$($sel:literal),*]
    ) => {
        $crate::core::types::MethodDescriptor {
            group: $group,
            name: $name,
            auth: $crate::core::types::AuthMode::$auth,
            required: &[$(stringify!($req)),*],
            optional: &[$(($opt, $crate::core::types::ParamDefault::$kind $(($value))?)),*],
            selectors: &[$($sel),*],
        }
    };
}

macro_rules! lastfm_methods {
    ($(
        $(#[doc = $doc:literal])*
        fn $binding:ident = $group:literal . $name:literal {
            auth: $auth:ident,
            required: [$($req:ident),* $(,)?],
            optional: [$($opt:literal => $kind:ident $(($value:literal))?),* $(,)?],
            select: [$($sel:literal),* $(,)?] $(,)?
        }
    )*) => {
        /// Every method the client can call, in declaration order
        pub static METHODS: &[$crate::core::types::MethodDescriptor] = &[$(
            $crate::lastfm::registry::method_descriptor!(
                $group, $name, $auth,
                [$($req),*],
                [$($opt => $kind $(($value))?),*],
                [$($sel),*]
            ),
        )*];

        impl<T: $crate::core::kernel::Transport> $crate::lastfm::LastfmClient<T> {
            $(
                $(#[doc = $doc])*
                #[doc = ""]
                #[doc = concat!("Calls `", $group, ".", $name, "`.")]
                pub async fn $binding(
                    &self,
                    $($req: &str,)*
                    keyword: &[(&str, &str)],
                ) -> Result<Vec<$crate::core::types::Record>, $crate::core::errors::LastfmError> {
                    const DESCRIPTOR: $crate::core::types::MethodDescriptor = $crate::lastfm::registry::method_descriptor!(
                        $group, $name, $auth,
                        [$($req),*],
                        [$($opt => $kind $(($value))?),*],
                        [$($sel),*]
                    );
                    self.call(&DESCRIPTOR, &[$($req),*], keyword).await
                }
            )*
        }
    };
}

pub(crate) use lastfm_methods;
pub(crate) use method_descriptor;

/// Find a method by group and name
pub fn lookup(group: &str, name: &str) -> Option<&'static MethodDescriptor> {
    METHODS.iter().find(|m| m.is(group, name))
}

/// Find a method by its wire identifier, e.g. `"artist.getInfo"`
pub fn lookup_method(method: &str) -> Option<&'static MethodDescriptor> {
    let (group, name) = method.split_once('.')?;
    lookup(group, name)
}

/// All methods, in declaration order
pub fn all_methods() -> &'static [MethodDescriptor] {
    METHODS
}

/// Methods belonging to one resource group
pub fn methods_in_group(group: &str) -> impl Iterator<Item = &'static MethodDescriptor> + '_ {
    METHODS.iter().filter(move |m| m.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::Selector;
    use crate::core::types::AuthMode;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_methods() {
        let mut seen = HashSet::new();
        for method in all_methods() {
            assert!(seen.insert(method.id()), "duplicate method {}", method);
        }
    }

    #[test]
    fn test_parameter_names_are_disjoint() {
        for method in all_methods() {
            let mut names = HashSet::new();
            for name in method.required.iter().copied().chain(method.optional_names()) {
                assert!(names.insert(name), "{} declares '{}' twice", method, name);
            }
        }
    }

    #[test]
    fn test_all_selectors_parse() {
        for method in all_methods() {
            for selector in method.selectors {
                assert!(
                    Selector::parse(selector).is_ok(),
                    "{} has bad selector {:?}",
                    method,
                    selector
                );
            }
        }
    }

    #[test]
    fn test_reserved_keys_are_never_parameters() {
        for method in all_methods() {
            for name in method.required.iter().copied().chain(method.optional_names()) {
                assert!(
                    !["api_key", "method", "sk", "api_sig"].contains(&name),
                    "{} declares reserved '{}'",
                    method,
                    name
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        let method = lookup("artist", "getInfo").unwrap();
        assert_eq!(method.required, &["artist"]);
        assert_eq!(method.auth, AuthMode::None);

        assert_eq!(lookup_method("track.love"), lookup("track", "love"));
        assert!(lookup_method("track.nope").is_none());
        assert!(lookup_method("nodot").is_none());
    }

    #[test]
    fn test_auth_modes() {
        for id in ["auth.getToken", "auth.getSession"] {
            assert_eq!(
                lookup_method(id).unwrap().auth,
                AuthMode::SessionBootstrap,
                "{}",
                id
            );
        }
        for id in ["track.love", "track.scrobble", "track.updateNowPlaying", "artist.addTags"] {
            assert_eq!(lookup_method(id).unwrap().auth, AuthMode::Required, "{}", id);
        }
    }

    #[test]
    fn test_group_listing_preserves_order() {
        let auth: Vec<_> = methods_in_group("auth").map(|m| m.name).collect();
        assert_eq!(auth, vec!["getToken", "getSession"]);
    }
}
