//! Shields forward everything but `hit` untouched, and forward `hit` with the
//! reduced damage. A mocked inner combatant records exactly what arrives.

use alien::{Alien, Combatant, Position, Shield, ShieldStats};
use mockall::{mock, predicate::eq, Sequence};
use rstest::rstest;
use static_assertions::assert_impl_all;

mock! {
    Inner {}

    impl Combatant for Inner {
        fn position(&self) -> Position;
        fn set_position(&mut self, position: Position);
        fn health(&self) -> i32;
        fn set_health(&mut self, health: i32);
        fn hit(&mut self, damage: i32);
    }
}

assert_impl_all!(Shield<Alien>: Combatant);
assert_impl_all!(Shield<Shield<Alien>>: Combatant);
assert_impl_all!(Shield<Box<dyn Combatant>>: Combatant);

#[rstest]
fn active_shield_forwards_reduced_damage_then_raw_damage() {
    let mut inner = MockInner::new();
    let mut seq = Sequence::new();
    inner
        .expect_hit()
        .with(eq(4))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    inner
        .expect_hit()
        .with(eq(5))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut shield = Shield::new(
        inner,
        ShieldStats {
            durability: 1,
            protection: 1,
        },
    );
    shield.hit(5);
    shield.hit(5);
    assert_eq!(shield.durability(), 0);
}

#[rstest]
fn fully_absorbed_hit_still_reaches_inner_as_zero() {
    let mut inner = MockInner::new();
    inner.expect_hit().with(eq(0)).times(1).return_const(());
    let mut shield = Shield::combat(inner);
    shield.hit(2);
    assert_eq!(shield.durability(), 19);
}

#[rstest]
fn hit_once_goes_through_the_shield() {
    let mut inner = MockInner::new();
    inner.expect_hit().with(eq(0)).times(1).return_const(());
    let mut shield = Shield::personal(inner);
    shield.hit_once();
    assert_eq!(shield.durability(), 4);
}

#[rstest]
fn teleport_is_forwarded_without_touching_durability() {
    let mut inner = MockInner::new();
    inner
        .expect_set_position()
        .with(eq(Position::new(3.0, 4.0)))
        .times(1)
        .return_const(());
    inner.expect_hit().never();
    let mut shield = Shield::personal(inner);
    shield.teleport(3.0, 4.0);
    assert_eq!(shield.durability(), 5);
}

#[rstest]
fn health_reads_and_writes_are_forwarded() {
    let mut inner = MockInner::new();
    inner.expect_health().times(2).return_const(0);
    inner
        .expect_set_health()
        .with(eq(12))
        .times(1)
        .return_const(());
    let mut shield = Shield::combat(inner);
    assert_eq!(shield.health(), 0);
    assert!(!shield.is_alive());
    shield.set_health(12);
}

#[rstest]
fn collision_reads_the_inner_position() {
    let mut inner = MockInner::new();
    inner
        .expect_position()
        .times(1)
        .return_const(Position::new(2.0, 2.0));
    let shield = Shield::personal(inner);
    let other = Alien::new(2.0, 2.0);
    assert!(shield.collides_with(&other));
}

#[rstest]
fn shield_and_bare_alien_observe_the_same_state() {
    let mut guarded = Shield::personal(Alien::with_health(0.0, 0.0, 100));
    let mut bare = Alien::with_health(0.0, 0.0, 100);

    guarded.set_x(50.0);
    bare.set_x(50.0);
    guarded.set_y(-12.25);
    bare.set_y(-12.25);
    assert_eq!((guarded.x(), guarded.y()), (bare.x(), bare.y()));
    assert_eq!(guarded.inner().y(), -12.25);

    guarded.teleport(-1.0, 8.5);
    bare.teleport(-1.0, 8.5);
    guarded.set_health(30);
    bare.set_health(30);

    assert_eq!(guarded.position(), bare.position());
    assert_eq!(guarded.health(), bare.health());
    assert_eq!(guarded.is_alive(), bare.is_alive());
    assert!(guarded.collides_with(&bare));
    assert_eq!(guarded.inner(), &bare);
}

#[rstest]
fn borrowed_alien_can_be_shielded_in_place() {
    let mut alien = Alien::with_health(0.0, 0.0, 100);
    {
        let mut shield = Shield::personal(&mut alien);
        shield.hit(5);
        shield.set_x(50.0);
    }
    assert_eq!(alien.health(), 96);
    assert_eq!(alien.x(), 50.0);
}

#[rstest]
fn boxed_layers_compose_like_concrete_ones() {
    let base: Box<dyn Combatant> = Box::new(Alien::with_health(0.0, 0.0, 100));
    let mut chain: Box<dyn Combatant> = Box::new(Shield::personal(Shield::combat(base)));
    chain.hit(10);
    assert_eq!(chain.health(), 96);
}

#[rstest]
fn boxed_chain_keeps_inner_layer_after_outer_breaks() {
    let base: Box<dyn Combatant> = Box::new(Alien::with_health(0.0, 0.0, 100));
    let mut chain = Shield::personal(Shield::combat(base));
    for _ in 0..6 {
        chain.hit(10);
    }
    assert_eq!(chain.health(), 75);
    assert!(!chain.is_active());
    assert_eq!(chain.inner().durability(), 14);

    chain.hit(3);
    assert_eq!(chain.health(), 75);
    assert_eq!(chain.inner().durability(), 13);
}
