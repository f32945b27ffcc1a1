//! Container resolution tests
//!
//! Exercises resolution through a built container using only the `container`
//! and `reference` scopes, which need no scope implementation.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    use weft_application::Container;
    use weft_domain::{
        Dependency, Error, Instance, Locator, RawType, ResourceDescriptor, Resolver, ResolverExt,
        Scoping, Target, Type, Value,
    };

    fn container_permanence() -> ResourceDescriptor {
        ResourceDescriptor::permanence(Scoping::new("container").group(Scoping::singleton()))
    }

    fn reference_permanence() -> ResourceDescriptor {
        ResourceDescriptor::permanence(Scoping::new("reference").group(Scoping::ignore()))
    }

    fn text(
        instance: Instance,
        scope: &'static str,
        value: &'static str,
    ) -> ResourceDescriptor {
        ResourceDescriptor::new(
            Locator::new(instance),
            scope,
            move |_: &Dependency, _: &dyn Resolver| Ok(Arc::new(value.to_string()) as Value),
        )
    }

    fn foo() -> Type {
        Type::named("Foo")
    }

    fn resolve_text(container: &Container, dependency: &Dependency) -> String {
        container
            .resolve_as::<String>(dependency)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_container_scoped_resources_are_constructible() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::default_of(foo()), "container", "foo"),
            text(Instance::default_of(Type::named("Bar")), "container", "bar"),
        ])
        .unwrap();

        container.init_eager().unwrap();
        assert_eq!(
            resolve_text(&container, &Dependency::new(Instance::default_of(foo()))),
            "foo"
        );
        assert_eq!(
            resolve_text(&container, &Dependency::of_type(Type::named("Bar"))),
            "bar"
        );
    }

    #[test]
    fn test_singleton_is_supplied_once_across_threads() {
        const THREADS: usize = 8;
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let container = Container::build(vec![
            container_permanence(),
            ResourceDescriptor::new(
                Locator::new(Instance::default_of(foo())),
                "container",
                move |_: &Dependency, _: &dyn Resolver| {
                    counted.fetch_add(1, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(20));
                    Ok(Arc::new(String::from("once")) as Value)
                },
            ),
        ])
        .unwrap();

        let barrier = Barrier::new(THREADS);
        let values: Vec<Value> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        container.resolve(&Dependency::of_type(foo())).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &values[0])));
    }

    #[test]
    fn test_eager_resources_are_created_on_init() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let container = Container::build(vec![
            ResourceDescriptor::permanence(
                Scoping::new("container").group(Scoping::singleton()).eager(),
            ),
            ResourceDescriptor::new(
                Locator::new(Instance::default_of(foo())),
                "container",
                move |_: &Dependency, _: &dyn Resolver| {
                    counted.fetch_add(1, Ordering::SeqCst);
                    Ok(Arc::new(()) as Value)
                },
            ),
        ])
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        container.init_eager().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        container.resolve(&Dependency::of_type(foo())).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_name_does_not_match_named_resources() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::new("special", foo()), "container", "special"),
        ])
        .unwrap();

        let err = container
            .resolve(&Dependency::new(Instance::default_of(foo())))
            .unwrap_err();
        assert!(matches!(err, Error::NoResourceForDependency { .. }));
        let message = err.to_string();
        assert!(message.contains("No resource for dependency: default Foo"));
        assert!(message.contains("candidates:"));
        assert!(message.contains("Foo special any container"));

        assert_eq!(
            resolve_text(&container, &Dependency::of_type(foo())),
            "special"
        );
    }

    #[test]
    fn test_name_patterns_select_resources() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::new("cache.local", foo()), "container", "local"),
            text(Instance::new("store", foo()), "container", "store"),
        ])
        .unwrap();

        assert_eq!(
            resolve_text(&container, &Dependency::new(Instance::new("cache.*", foo()))),
            "local"
        );
    }

    #[test]
    fn test_resolve_all_returns_every_match() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::new("a", foo()), "container", "a"),
            text(Instance::new("b", foo()), "container", "b"),
            text(Instance::default_of(Type::named("Bar")), "container", "bar"),
        ])
        .unwrap();

        let all: Vec<String> = container
            .resolve_all(&Dependency::of_type(foo()))
            .unwrap()
            .into_iter()
            .map(|v| v.downcast::<String>().unwrap().to_string())
            .collect();
        assert_eq!(all, vec!["a", "b"]);
        assert!(
            container
                .resolve_all(&Dependency::of_type(Type::named("Baz")))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_upper_bound_finds_subtypes() {
        let base = RawType::new("Base");
        let sub = RawType::with_supertypes("Sub", [base.clone()]);
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::default_of(sub), "container", "sub"),
        ])
        .unwrap();

        assert_eq!(
            resolve_text(
                &container,
                &Dependency::of_type(Type::raw(base.clone()).as_upper_bound())
            ),
            "sub"
        );
        assert!(container.resolve(&Dependency::of_type(base)).is_err());
    }

    #[test]
    fn test_targeted_resource_wins_inside_its_target() {
        let bar = Type::named("Bar");
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::default_of(foo()), "container", "plain"),
            text(Instance::default_of(foo()), "container", "for bar")
                .with_target(Target::any().injecting_into(Instance::default_of(bar.clone()))),
            ResourceDescriptor::new(
                Locator::new(Instance::default_of(bar)),
                "container",
                |dependency: &Dependency, context: &dyn Resolver| {
                    context
                        .resolve(&dependency.instanced(Instance::default_of(Type::named("Foo"))))
                },
            ),
        ])
        .unwrap();

        assert_eq!(
            resolve_text(&container, &Dependency::of_type(Type::named("Bar"))),
            "for bar"
        );
        assert_eq!(
            resolve_text(&container, &Dependency::of_type(foo())),
            "plain"
        );
    }

    #[test]
    fn test_decorator_through_reference_scope() {
        let decorator = Type::named("Decorator");
        let container = Container::build(vec![
            container_permanence(),
            reference_permanence(),
            // the Foo everyone gets is the decorator
            ResourceDescriptor::new(
                Locator::new(Instance::default_of(foo())),
                "reference",
                |dependency: &Dependency, context: &dyn Resolver| {
                    context.resolve(
                        &dependency.instanced(Instance::default_of(Type::named("Decorator"))),
                    )
                },
            ),
            ResourceDescriptor::new(
                Locator::new(Instance::default_of(decorator.clone())),
                "container",
                |dependency: &Dependency, context: &dyn Resolver| {
                    let inner = context
                        .resolve_as::<String>(&dependency.instanced(Instance::default_of(foo())))?;
                    Ok(Arc::new(format!("decorated {inner}")) as Value)
                },
            ),
            // the Foo the decorator gets is the real one
            text(Instance::default_of(foo()), "container", "bar")
                .with_target(Target::any().injecting_into(Instance::default_of(decorator))),
        ])
        .unwrap();

        assert_eq!(
            resolve_text(&container, &Dependency::new(Instance::default_of(foo()))),
            "decorated bar"
        );
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let container = Container::build(vec![
            container_permanence(),
            ResourceDescriptor::new(
                Locator::new(Instance::default_of(foo())),
                "container",
                |dependency: &Dependency, context: &dyn Resolver| {
                    context.resolve(&dependency.instanced(Instance::default_of(foo())))
                },
            ),
        ])
        .unwrap();

        let err = container.resolve(&Dependency::of_type(foo())).unwrap_err();
        assert!(matches!(err, Error::DependencyCycle { .. }));
    }

    #[test]
    fn test_context_aware_hook_adapts_shared_value() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::any_of(Type::named("Logger")), "container", "log")
                .with_context_aware(|value: Value, dependency: &Dependency| {
                    let base = value
                        .downcast::<String>()
                        .map_err(|_| Error::internal("not a string"))?;
                    Ok(Arc::new(format!("{base}:{}", dependency.name())) as Value)
                }),
        ])
        .unwrap();

        assert_eq!(
            resolve_text(
                &container,
                &Dependency::new(Instance::new("audit", Type::named("Logger")))
            ),
            "log:audit"
        );
    }

    #[test]
    fn test_verify_runs_verifiers() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::default_of(foo()), "container", "foo").with_verifier(
                |_: &Locator, context: &dyn Resolver| {
                    context
                        .resolve(&Dependency::of_type(Type::named("Missing")))
                        .map(|_| ())
                },
            ),
        ])
        .unwrap();

        let err = container.verify().unwrap_err();
        assert!(matches!(err, Error::NoResourceForDependency { .. }));
    }

    #[test]
    fn test_display_dumps_resources() {
        let container = Container::build(vec![
            container_permanence(),
            text(Instance::default_of(foo()), "container", "foo"),
        ])
        .unwrap();
        let dump = container.to_string();
        assert!(dump.contains("Foo\n"));
        assert!(dump.contains("container"));
    }
}
