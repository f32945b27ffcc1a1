//! Unit tests for locator matching and specificity

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use weft_domain::{Dependency, Instance, Locator, Name, RawType, Scoping, Target, Type};

    fn number() -> RawType {
        RawType::new("Number")
    }

    fn integer() -> RawType {
        RawType::with_supertypes("Integer", [number()])
    }

    fn scoping() -> Arc<Scoping> {
        Arc::new(Scoping::new("container").group(Scoping::singleton()))
    }

    #[test]
    fn test_subtype_binding_matches_supertype_request() {
        let binding = Locator::new(Instance::default_of(integer()));
        assert!(binding.is_matching(&Dependency::new(Instance::default_of(number()))));
        assert!(binding.is_matching(&Dependency::of_type(Type::wildcard())));
        assert!(!Locator::new(Instance::default_of(number()))
            .is_matching(&Dependency::new(Instance::default_of(integer()))));
    }

    #[test]
    fn test_default_request_does_not_match_named_binding() {
        let named = Locator::new(Instance::new("answer", integer()));
        assert!(!named.is_matching(&Dependency::new(Instance::default_of(integer()))));
        assert!(named.is_matching(&Dependency::of_type(integer())));
    }

    #[test]
    fn test_targeted_binding_applies_only_inside_target() {
        let parent = Instance::default_of(Type::named("Report"));
        let binding = Locator::new(Instance::default_of(integer()))
            .targeting(Target::any().injecting_into(parent.clone()));

        let top_level = Dependency::of_type(integer());
        assert!(!binding.is_matching(&top_level));

        let inside = top_level
            .injecting_into(&Locator::new(parent), scoping())
            .unwrap();
        assert!(binding.is_matching(&inside));
    }

    #[test]
    fn test_within_looks_further_up_the_hierarchy() {
        let outer = Instance::default_of(Type::named("App"));
        let inner = Instance::default_of(Type::named("Service"));
        let binding = Locator::new(Instance::default_of(integer()))
            .targeting(Target::any().within(outer.clone()));

        let dep = Dependency::of_type(Type::named("Service"))
            .injecting_into(&Locator::new(outer), scoping())
            .and_then(|d| d.typed(integer()).injecting_into(&Locator::new(inner), scoping()))
            .unwrap();
        assert!(binding.is_matching(&dep));
    }

    #[test]
    fn test_specificity_prefers_named_and_targeted() {
        let unnamed = Locator::new(Instance::default_of(integer()));
        let named = Locator::new(Instance::new("answer", integer()));
        let targeted = Locator::new(Instance::default_of(integer()))
            .targeting(Target::any().injecting_into(Instance::default_of(Type::named("X"))));
        let bounded = Locator::new(Instance::any_of(Type::raw(integer()).as_upper_bound()));

        assert!(named.specificity() > unnamed.specificity());
        assert!(targeted.specificity() > unnamed.specificity());
        assert!(unnamed.specificity() > bounded.specificity());
        assert!(Name::named("answer").specificity() > Name::default_name().specificity());
    }
}
