//! Registry restoration, resolver guarantees and misuse detection.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};

use lawful_conformance::{verify_laws, LawFailure};
use lawful_fixtures::{Identity, IDENTITY};
use lawful_strategy::{
    bind_container, resolve_function_type, resolve_type_variable, self_equal_type_vars,
    with_container_bound, TypeRegistry,
};
use lawful_types::{
    check, Args, ContainerDescriptor, ContainerId, Drawn, Fn1, InterfaceDescriptor, InterfaceId,
    Law, LawSettings, Lawful, LawfulError, PureFn, Ty, TypeKey, TypeVar, Value,
    VarBound, Verdict,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const PANICS: InterfaceId = InterfaceId::new("Panics");

fn explode(args: &mut Args) -> Verdict {
    let _: Exploding = args.next()?;
    panic!("law body exploded");
}

#[derive(Debug, Clone, PartialEq)]
struct Exploding(Value);

impl Lawful for Exploding {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Exploding>(ContainerId::new("Exploding"))
            .implements(
                InterfaceDescriptor::new(PANICS).law(Law::new(
                    "explodes",
                    [Ty::interface(PANICS)],
                    explode,
                )),
            )
            .from_success(Exploding)
            .build()
    }
}

/// Claims to be `Identity` but describes another type.
#[derive(Debug, Clone, PartialEq)]
struct Impostor(Value);

impl Lawful for Impostor {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Identity>(ContainerId::new("Impostor"))
            .implements(
                InterfaceDescriptor::new(PANICS).law(Law::new("holds", [], |_| check(true, "always"))),
            )
            .from_success(Identity)
            .build()
    }
}

#[test]
fn panicking_law_is_a_failure_and_registry_is_restored() {
    init_tracing();
    let registry = Rc::new(TypeRegistry::with_defaults());
    let before = registry.snapshot();
    let suite = verify_laws::<Exploding>(&registry, LawSettings::with_cases(8)).unwrap();

    let failure = suite.cases()[0].run().unwrap_err();
    assert!(failure.is_violation(), "{failure}");
    assert!(failure.to_string().contains("law body exploded"));
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn scope_is_released_when_the_body_unwinds() {
    let registry = TypeRegistry::with_defaults();
    let before = registry.snapshot();
    let descriptor = Identity::descriptor();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        with_container_bound(&registry, &descriptor, &LawSettings::default(), |registry| {
            assert!(registry.contains(TypeKey::Container(IDENTITY)));
            panic!("interrupted");
        })
    }));

    assert!(outcome.is_err());
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn descriptor_for_another_type_is_an_environment_error() {
    let registry = Rc::new(TypeRegistry::with_defaults());
    let suite = verify_laws::<Impostor>(&registry, LawSettings::with_cases(4)).unwrap();
    match suite.cases()[0].run() {
        Err(LawFailure::Error(LawfulError::Environment(message))) => {
            assert!(message.contains("Impostor"), "{message}");
        }
        other => panic!("expected an environment error, got {other:?}"),
    }
}

#[test]
fn releasing_out_of_order_is_corruption() {
    let registry = TypeRegistry::with_defaults();
    let descriptor = Identity::descriptor();
    let scope = bind_container(&registry, &descriptor, &LawSettings::default()).unwrap();
    let stray = registry.push(TypeKey::TypeVar, self_equal_type_vars(), "stray");

    let err = scope.close().unwrap_err();
    assert!(matches!(err, LawfulError::RegistryCorruption(_)));
    registry.pop(stray).unwrap();
}

#[test]
fn nested_scopes_restore_in_order() {
    let registry = TypeRegistry::with_defaults();
    let before = registry.snapshot();
    let identity = Identity::descriptor();
    let outcome = lawful_fixtures::Outcome::descriptor();
    let settings = LawSettings::default();

    with_container_bound(&registry, &identity, &settings, |registry| {
        let inner_before = registry.snapshot();
        with_container_bound(registry, &outcome, &settings, |_| ()).unwrap();
        assert_eq!(registry.snapshot(), inner_before);
    })
    .unwrap();
    assert_eq!(registry.snapshot(), before);
}

#[test]
fn type_variables_stay_self_equal_across_draws() {
    for bound in [VarBound::Any, VarBound::Scalar, VarBound::Numeric, VarBound::Text] {
        let strategy = resolve_type_variable(&TypeVar { name: "A", bound });
        let mut runner = TestRunner::new(Config {
            cases: 500,
            failure_persistence: None,
            ..Config::default()
        });
        runner
            .run(&strategy, |drawn| {
                let value = drawn.downcast::<Value>().expect("type variables draw values");
                prop_assert!(value.is_self_equal(), "{:?}", value);
                prop_assert_eq!(&value, &value.clone());
                Ok(())
            })
            .unwrap();
    }
}

fn value_functions() -> BoxedStrategy<Drawn> {
    let registry = TypeRegistry::new();
    registry.install(TypeKey::TypeVar, self_equal_type_vars(), "test");
    resolve_function_type(&Ty::function([Ty::var("A")], Ty::var("B")), &registry)
        .expect("type variables are bound")
}

fn arguments() -> BoxedStrategy<Value> {
    resolve_type_variable(&TypeVar {
        name: "A",
        bound: VarBound::Any,
    })
    .prop_filter_map("type variables draw values", |drawn| drawn.downcast::<Value>())
    .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn drawn_functions_are_pure(f in value_functions(), arg in arguments()) {
        let f: Fn1<Value, Value> = Fn1::new(f.downcast::<PureFn>().unwrap()).unwrap();
        prop_assert_eq!(f.call(&arg), f.call(&arg));
        let twin = f.clone();
        prop_assert_eq!(f.call(&arg), twin.call(&arg));
        // Equal but distinct arguments must agree too.
        prop_assert_eq!(f.call(&Value::Float(0.0)), f.call(&Value::Float(-0.0)));
        prop_assert_eq!(
            f.call(&Value::List(vec![arg.clone(), Value::Float(0.0)])),
            f.call(&Value::List(vec![arg.clone(), Value::Float(-0.0)]))
        );
    }
}
