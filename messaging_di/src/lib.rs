//! Minimal compile-time dependency injection.
//!
//! A provider is a struct created with the [`provider!`] macro. It owns the
//! "root" values (database pools, configs, ...) and a [`TypeMap`] cache.
//! Every other type implements [`Build`] (usually via `#[derive(Build)]`) and
//! is assembled recursively from its fields. Built values are cached, so each
//! type is only constructed once per provider.

#[cfg(test)]
extern crate self as messaging_di;

pub use messaging_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

/// Returns the cached `T` or builds it with `build` and caches a clone.
pub fn cached<P: Provider, T: Clone + 'static>(
    provider: &mut P,
    build: impl FnOnce(&mut P) -> T,
) -> T {
    if let Some(value) = provider.cache().get::<T>() {
        return value.clone();
    }
    let value = build(provider);
    provider.cache().insert(value.clone());
    value
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    #[derive(Debug, Clone)]
    struct Config {
        name: &'static str,
    }

    #[derive(Debug, Clone, Build)]
    struct Service {
        config: Config,
        #[state]
        counter: Counter,
    }

    #[derive(Debug, Clone, Build)]
    struct Api {
        service: Service,
    }

    crate::provider! {
        TestProvider {
            config: Config,
        }
    }

    fn provider() -> TestProvider {
        TestProvider::from_parts(Config { name: "test" })
    }

    #[test]
    fn builds_dependencies() {
        let api: Api = provider().provide();
        assert_eq!(api.service.config.name, "test");
    }

    #[test]
    fn caches_built_values() {
        let mut provider = provider();

        let a: Service = provider.provide();
        a.counter.0.fetch_add(1, Ordering::Relaxed);
        let api: Api = provider.provide();

        assert!(Arc::ptr_eq(&a.counter.0, &api.service.counter.0));
        assert_eq!(api.service.counter.0.load(Ordering::Relaxed), 1);
    }
}
