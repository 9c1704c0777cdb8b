use std::io::Write;

use arena_core::{
    AbilityEffect, AbilityKind, ActorStats, BattleOutcome, CombatEvent, EventSink,
};

const BANNER_RULE: &str = "=====================================================";

/// Event sink that writes one or more text lines per event.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for TextPresenter<W> {
    fn emit(&mut self, event: &CombatEvent) -> std::io::Result<()> {
        for line in event_lines(event) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

/// `Name: X, Energy: E, Armor: A, Attack: K`
pub fn stats_line(stats: &ActorStats) -> String {
    format!(
        "Name: {}, Energy: {}, Armor: {}, Attack: {}",
        stats.name, stats.energy, stats.armor, stats.attack
    )
}

/// Renders an event as display lines. Empty strings are blank lines.
pub fn event_lines(event: &CombatEvent) -> Vec<String> {
    match event {
        CombatEvent::BattleStarted { .. } => vec![
            BANNER_RULE.to_owned(),
            "Welcome to the Robot Battle Simulator!".to_owned(),
            "The battle begins!".to_owned(),
            BANNER_RULE.to_owned(),
            String::new(),
        ],
        CombatEvent::RoundStarted { round } => vec![format!("=== Round {round} ===")],
        CombatEvent::TurnStarted { robot, .. } => vec![
            String::new(),
            format!("{}'s turn:", robot.name),
            stats_line(robot),
        ],
        CombatEvent::Attacked(strike) => vec![format!(
            "{} attacks {} and deals {} damage!",
            strike.attacker, strike.target, strike.damage
        )],
        CombatEvent::AbilityUsed {
            user,
            ability,
            effect,
        } => vec![ability_line(user, *ability, effect)],
        CombatEvent::AbilityOnCooldown {
            user,
            ability,
            remaining,
        } => vec![format!(
            "{user} cannot use {} because it is still on cooldown ({remaining} turns left).",
            ability.label()
        )],
        CombatEvent::CounterAttacked(strike) => vec![format!(
            "{} strikes back at {} and deals {} damage!",
            strike.attacker, strike.target, strike.damage
        )],
        CombatEvent::Regenerated(heal) => {
            vec![format!("{} restores {} energy.", heal.name, heal.amount)]
        }
        CombatEvent::RoundEnded { boss, .. } => {
            vec![String::new(), "Boss status:".to_owned(), stats_line(boss)]
        }
        CombatEvent::BossDefeated { boss } => vec![format!("{boss} has been defeated!")],
        CombatEvent::BattleEnded { outcome, boss, .. } => match outcome {
            BattleOutcome::Victory => {
                vec![format!("Congratulations! The robots defeated {boss}!")]
            }
            BattleOutcome::Defeat => vec![format!("Game over! {boss} defeated every robot.")],
        },
    }
}

fn ability_line(user: &str, ability: AbilityKind, effect: &AbilityEffect) -> String {
    match effect {
        AbilityEffect::Healed(heal) => format!(
            "{user} uses {} and restores {} energy.",
            ability.label(),
            heal.amount
        ),
        AbilityEffect::Damaged(strike) if ability == AbilityKind::PlasmaAttack => format!(
            "{user} uses {} on {}, dealing {} armor-piercing damage!",
            ability.label(),
            strike.target,
            strike.damage
        ),
        AbilityEffect::Damaged(strike) => format!(
            "{user} uses {} on {}, dealing {} damage!",
            ability.label(),
            strike.target,
            strike.damage
        ),
        AbilityEffect::Pierced(strike) => format!(
            "{user} uses {} on {}, dealing {} armor-piercing damage!",
            ability.label(),
            strike.target,
            strike.damage
        ),
        AbilityEffect::ArmorRaised { amount, .. } => format!(
            "{user} activates {}, raising armor by {amount}!",
            ability.label()
        ),
    }
}
