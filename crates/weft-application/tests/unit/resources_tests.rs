//! Unit tests for building, grouping and ordering resources

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use weft_application::{Resources, ScopeLookup};
    use weft_domain::{
        Dependency, Error, Instance, Locator, Name, RawType, ResourceDescriptor, Resolver, Result,
        Scope, Scoping, Source, Target, Type, Value,
    };

    fn no_scopes() -> ScopeLookup {
        Arc::new(
            |name: &Name, _context: &dyn Resolver| -> Result<Arc<dyn Scope>> {
                Err(Error::internal(format!("No scope {name}")))
            },
        )
    }

    fn container_permanence() -> ResourceDescriptor {
        ResourceDescriptor::permanence(Scoping::new("container").group(Scoping::singleton()))
    }

    fn constant(signature: Locator) -> ResourceDescriptor {
        ResourceDescriptor::new(signature, "container", |_: &Dependency, _: &dyn Resolver| {
            Ok(Arc::new(()) as Value)
        })
    }

    fn foo() -> Type {
        Type::named("Foo")
    }

    fn names(resources: &[Arc<weft_application::Resource>]) -> Vec<String> {
        resources
            .iter()
            .map(|r| format!("{} {}", r.signature().instance.name, r.signature().target))
            .collect()
    }

    #[test]
    fn test_more_specific_signatures_come_first() {
        let resources = Resources::new(
            vec![
                container_permanence(),
                constant(Locator::new(Instance::default_of(foo()))),
                constant(Locator::new(Instance::new("special", foo()))),
                constant(Locator::new(Instance::default_of(foo()))).with_target(
                    Target::any().injecting_into(Instance::default_of(Type::named("Bar"))),
                ),
            ],
            no_scopes(),
        )
        .unwrap();

        assert_eq!(
            names(resources.for_type(&foo())),
            vec!["special any", "default [default Bar]", "default any"]
        );
    }

    #[test]
    fn test_equal_signatures_keep_declaration_order() {
        let resources = Resources::new(
            vec![
                container_permanence(),
                constant(Locator::new(Instance::default_of(foo())))
                    .with_source(Source::new("first")),
                constant(Locator::new(Instance::default_of(foo())))
                    .with_source(Source::new("second")),
            ],
            no_scopes(),
        )
        .unwrap();

        let sources: Vec<&str> = resources
            .for_type(&foo())
            .iter()
            .map(|r| r.source().ident.as_str())
            .collect();
        assert_eq!(sources, vec!["first", "second"]);
    }

    #[test]
    fn test_subtypes_are_grouped_before_supertypes() {
        let base = RawType::new("Base");
        let sub = RawType::with_supertypes("Sub", [base.clone()]);
        let resources = Resources::new(
            vec![
                container_permanence(),
                constant(Locator::new(Instance::default_of(base.clone()))),
                constant(Locator::new(Instance::default_of(sub.clone()))),
            ],
            no_scopes(),
        )
        .unwrap();

        let groups: Vec<&str> = resources.groups().map(|(raw, _)| raw.name()).collect();
        assert_eq!(groups.first(), Some(&"Sub"));
        assert!(groups.contains(&"Base"));
        assert_eq!(resources.for_type(&Type::raw(sub)).len(), 1);
        assert_eq!(
            resources
                .for_upper_bound(&Type::raw(base).as_upper_bound())
                .len(),
            2
        );
    }

    #[test]
    fn test_unknown_type_has_no_resources() {
        let resources = Resources::new(vec![container_permanence()], no_scopes()).unwrap();
        assert!(resources.for_type(&Type::named("Unknown")).is_empty());
    }

    #[test]
    fn test_wildcard_yields_generic_resources_only() {
        let exact = Resources::new(
            vec![
                container_permanence(),
                constant(Locator::new(Instance::default_of(foo()))),
            ],
            no_scopes(),
        )
        .unwrap();
        assert!(exact.for_type(&Type::wildcard()).is_empty());
        assert!(!exact.to_string().contains("? extends *"));

        let generic = Resources::new(
            vec![
                container_permanence(),
                constant(Locator::new(Instance::default_of(foo()))),
                constant(Locator::new(Instance::default_of(
                    Type::named("List").parameterized([foo().as_upper_bound()]),
                ))),
            ],
            no_scopes(),
        )
        .unwrap();
        assert_eq!(generic.for_type(&Type::wildcard()).len(), 1);
        assert!(generic.to_string().contains("? extends *"));
    }

    #[test]
    fn test_undefined_scope_aborts_the_build() {
        let err = Resources::new(
            vec![
                container_permanence(),
                ResourceDescriptor::new(
                    Locator::new(Instance::default_of(foo())),
                    "custom",
                    |_: &Dependency, _: &dyn Resolver| Ok(Arc::new(()) as Value),
                )
                .with_source(Source::new("bindings")),
            ],
            no_scopes(),
        )
        .err()
        .unwrap();

        assert!(matches!(err, Error::InconsistentDeclaration { .. }));
        assert!(
            err.to_string()
                .contains("Scope `custom` is used but not defined for: default Foo any from bindings#0")
        );
    }

    #[test]
    fn test_permanences_may_refer_to_each_other() {
        let resources = Resources::new(
            vec![
                container_permanence(),
                ResourceDescriptor::permanence_with("request:42", |context: &dyn Resolver| {
                    let group = context
                        .resolve(&Dependency::new(Instance::new("@request", Type::permanence())))?
                        .downcast::<Scoping>()
                        .map_err(|_| Error::internal("not a scoping"))?;
                    Ok(Scoping::new("request:42").group(group))
                }),
                ResourceDescriptor::permanence(Scoping::new("@request").stable_in("@request")),
            ],
            no_scopes(),
        )
        .unwrap();

        let permanences = resources.for_type(&Type::permanence());
        assert_eq!(permanences.len(), 3);
        assert!(
            permanences
                .iter()
                .all(|r| r.permanence().scope().as_str() == "container")
        );
    }

    #[test]
    fn test_permanences_without_container_fall_back_to_singleton() {
        let resources = Resources::new(
            vec![ResourceDescriptor::permanence(Scoping::new("thread"))],
            no_scopes(),
        )
        .unwrap();
        let permanence = resources.for_type(&Type::permanence())[0].permanence();
        assert_eq!(permanence.scope().as_str(), "@singleton");
    }

    #[test]
    fn test_non_permanence_lookup_during_bootstrap_fails() {
        let err = Resources::new(
            vec![ResourceDescriptor::permanence_with("broken", |context: &dyn Resolver| {
                context.resolve(&Dependency::of_type(Type::named("Foo")))?;
                Ok(Scoping::new("broken"))
            })],
            no_scopes(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::BootstrapOnly { .. }));
    }

    #[test]
    fn test_display_lists_each_group() {
        let resources = Resources::new(
            vec![
                container_permanence(),
                constant(Locator::new(Instance::default_of(foo()))),
            ],
            no_scopes(),
        )
        .unwrap();
        let dump = resources.to_string();
        assert!(dump.contains("Foo\n\t#1 Foo default any container unknown#0"));
        assert_eq!(resources.resource_count(), 2);
        assert_eq!(resources.len(), 2);
    }
}
