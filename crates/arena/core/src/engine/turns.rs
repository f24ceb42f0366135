//! Round loop.
//!
//! Each round walks the roster in construction order. A living participant
//! prepares, takes exactly one action, then recovers; dead participants are
//! skipped entirely. All rounds always run.

use crate::combat::{self, ActionFailure, ActionKind};
use crate::config::ArenaConfig;
use crate::env::{DrawContext, RandomSource};
use crate::events::{CombatEvent, CombatLog, EventKind, Outcome, Snapshot};
use crate::state::{Combatant, EntityId, Roster, Round};

use super::{SimulationError, targeting, validation};

/// Identifies the turn an event belongs to.
#[derive(Clone, Copy, Debug)]
struct Turn {
    round: Round,
    sequence: u64,
    actor: EntityId,
}

/// What one action step produced, before it is written to the log.
struct Resolution {
    kind: EventKind,
    target: Option<EntityId>,
    magnitude: i32,
    outcome: Outcome,
    detail: String,
    /// Set when the action fired a death hook.
    death: Option<(EntityId, String)>,
}

impl Resolution {
    fn failed(action: ActionKind, target: Option<EntityId>, failure: ActionFailure) -> Self {
        Self {
            kind: action.into(),
            target,
            magnitude: 0,
            detail: failure.to_string(),
            outcome: Outcome::Failed(failure),
            death: None,
        }
    }
}

pub(crate) struct Scheduler<'a> {
    roster: Roster,
    config: &'a ArenaConfig,
    rng: RandomSource<'a>,
    log: CombatLog,
    nonce: u64,
}

impl<'a> Scheduler<'a> {
    pub(crate) fn new(
        roster: Roster,
        rounds: u32,
        rng: RandomSource<'a>,
        config: &'a ArenaConfig,
    ) -> Self {
        Self {
            roster,
            config,
            log: CombatLog::new(rng.game_seed(), rounds),
            rng,
            nonce: 0,
        }
    }

    pub(crate) fn run(mut self) -> Result<CombatLog, SimulationError> {
        let rounds = self.log.rounds;
        tracing::info!(
            participants = self.roster.len(),
            rounds,
            seed = self.rng.game_seed(),
            "starting simulation"
        );

        let mut round = Round::FIRST;
        while round.0 <= rounds {
            tracing::debug!(
                "{} begins with {} combatants standing",
                round,
                self.roster.alive().count()
            );
            for index in 0..self.roster.len() {
                self.take_turn(round, EntityId(index as u32))?;
            }
            round = round.next();
        }

        self.log.finish(&self.roster);
        tracing::info!(
            events = self.log.events().len(),
            survivors = self.log.survivors().count(),
            "simulation finished"
        );

        Ok(self.log)
    }

    fn take_turn(&mut self, round: Round, actor: EntityId) -> Result<(), SimulationError> {
        let combatant = self
            .roster
            .get(actor)
            .ok_or(SimulationError::UnknownEntity {
                round,
                entity: actor,
            })?;
        if !combatant.is_alive() {
            tracing::trace!("{} skipped: {} is down", round, combatant.name);
            return Ok(());
        }

        let turn = Turn {
            round,
            sequence: self.nonce,
            actor,
        };
        self.nonce += 1;

        let prepare = combatant.prepare_battle();
        let capabilities = combatant.capabilities;
        self.record(
            turn,
            EventKind::Prepare,
            None,
            0,
            Outcome::Applied,
            format!("{}. {}", prepare.check, prepare.note),
        )?;

        let rng = self.rng;
        let action = self.config.policy.choose(&capabilities, |total| {
            rng.below(turn.sequence, actor, DrawContext::Action, total)
        });
        tracing::debug!("{} {} chose {}", round, actor, action);

        let Resolution {
            kind,
            target,
            magnitude,
            outcome,
            detail,
            death,
        } = self.resolve(turn, action)?;
        if let Some(failure) = outcome.failure() {
            tracing::warn!("{} {} {} was a no-op: {}", round, actor, action, failure);
        }
        self.record(turn, kind, target, magnitude, outcome, detail)?;

        if let Some((fallen, description)) = death {
            tracing::info!("{} {} has fallen", round, fallen);
            self.record(
                Turn {
                    actor: fallen,
                    ..turn
                },
                EventKind::Death,
                None,
                0,
                Outcome::Applied,
                description,
            )?;
        }

        let combatant = self
            .roster
            .get_mut(actor)
            .ok_or(SimulationError::UnknownEntity {
                round,
                entity: actor,
            })?;
        if combatant.is_alive() {
            let recover = combatant.after_battle(&self.config.costs);
            self.record(
                turn,
                EventKind::Recover,
                None,
                recover.energy_restored as i32,
                Outcome::Applied,
                recover.note,
            )?;
        }

        validation::check_touched(&self.roster, round, core::iter::once(actor).chain(target))
    }

    fn resolve(&mut self, turn: Turn, action: ActionKind) -> Result<Resolution, SimulationError> {
        match action {
            ActionKind::Attack => self.resolve_attack(turn),
            ActionKind::Defend => self.resolve_defend(turn),
            ActionKind::Heal => self.resolve_heal(turn),
        }
    }

    fn resolve_attack(&mut self, turn: Turn) -> Result<Resolution, SimulationError> {
        let pool = targeting::attack_targets(&self.roster, turn.actor);
        let Some(target) = self.pick_target(turn, &pool) else {
            return Ok(Resolution::failed(
                ActionKind::Attack,
                None,
                ActionFailure::NoValidTarget {
                    action: ActionKind::Attack,
                },
            ));
        };

        let config = self.config;
        let (attacker, defender) = self.pair(turn, target)?;
        match attacker.attack(defender, &config.costs, config.health_floor) {
            Ok(report) => {
                let damage = report.damage;
                let detail = format!(
                    "{} hits {} with {} for {} ({} absorbed), health {} -> {}",
                    attacker.name,
                    defender.name,
                    attacker.weapon_label(),
                    damage.applied,
                    damage.mitigated,
                    damage.health_before,
                    damage.health_after
                );
                Ok(Resolution {
                    kind: EventKind::Attack,
                    target: Some(target),
                    magnitude: damage.applied,
                    outcome: Outcome::Applied,
                    detail,
                    death: damage
                        .death
                        .map(|notice| (notice.entity, notice.description)),
                })
            }
            Err(failure) => Ok(Resolution::failed(ActionKind::Attack, Some(target), failure)),
        }
    }

    fn resolve_defend(&mut self, turn: Turn) -> Result<Resolution, SimulationError> {
        let owner = self.actor_mut(turn)?;
        match combat::defend(owner) {
            Ok(report) => Ok(Resolution {
                kind: EventKind::Defend,
                target: None,
                magnitude: report.amount,
                outcome: Outcome::Applied,
                detail: format!(
                    "{} raises a guard and recovers {}, health {} -> {}",
                    owner.name, report.amount, report.health_before, report.health_after
                ),
                death: None,
            }),
            Err(failure) => Ok(Resolution::failed(ActionKind::Defend, None, failure)),
        }
    }

    fn resolve_heal(&mut self, turn: Turn) -> Result<Resolution, SimulationError> {
        let pool = targeting::heal_targets(&self.roster, turn.actor, self.config.allow_self_heal);
        let Some(target) = self.pick_target(turn, &pool) else {
            return Ok(Resolution::failed(
                ActionKind::Heal,
                None,
                ActionFailure::NoValidTarget {
                    action: ActionKind::Heal,
                },
            ));
        };

        let costs = self.config.costs;
        let (result, healer, patient) = if target == turn.actor {
            let owner = self.actor_mut(turn)?;
            let result = combat::heal(owner, None, &costs);
            (result, owner.name.clone(), owner.name.clone())
        } else {
            let (owner, beneficiary) = self.pair(turn, target)?;
            let result = combat::heal(owner, Some(&mut *beneficiary), &costs);
            (result, owner.name.clone(), beneficiary.name.clone())
        };

        match result {
            Ok(report) => Ok(Resolution {
                kind: EventKind::Heal,
                target: Some(target),
                magnitude: report.amount,
                outcome: Outcome::Applied,
                detail: format!(
                    "{} heals {} for {}, health {} -> {}",
                    healer, patient, report.amount, report.health_before, report.health_after
                ),
                death: None,
            }),
            Err(failure) => Ok(Resolution::failed(ActionKind::Heal, Some(target), failure)),
        }
    }

    fn pick_target(&self, turn: Turn, pool: &[EntityId]) -> Option<EntityId> {
        let rng = self.rng;
        targeting::pick(pool, |len| {
            rng.below(turn.sequence, turn.actor, DrawContext::Target, len)
        })
    }

    fn actor_mut(&mut self, turn: Turn) -> Result<&mut Combatant, SimulationError> {
        self.roster
            .get_mut(turn.actor)
            .ok_or(SimulationError::UnknownEntity {
                round: turn.round,
                entity: turn.actor,
            })
    }

    fn pair(
        &mut self,
        turn: Turn,
        target: EntityId,
    ) -> Result<(&mut Combatant, &mut Combatant), SimulationError> {
        self.roster
            .pair_mut(turn.actor, target)
            .ok_or(SimulationError::UnknownEntity {
                round: turn.round,
                entity: target,
            })
    }

    fn record(
        &mut self,
        turn: Turn,
        kind: EventKind,
        target: Option<EntityId>,
        magnitude: i32,
        outcome: Outcome,
        detail: String,
    ) -> Result<(), SimulationError> {
        let snapshot = |entity: EntityId| {
            self.roster
                .get(entity)
                .map(Snapshot::of)
                .ok_or(SimulationError::UnknownEntity {
                    round: turn.round,
                    entity,
                })
        };
        let actor_state = snapshot(turn.actor)?;
        let target_state = target.map(snapshot).transpose()?;

        self.log.push(CombatEvent {
            round: turn.round,
            sequence: turn.sequence,
            actor: turn.actor,
            kind,
            target,
            magnitude,
            outcome,
            detail,
            actor_state,
            target_state,
        });
        Ok(())
    }
}
