//! Skill allocation for a custom hero.

use crate::game::Stats;
use crate::screen::{GameCondition, HeroCreationView, Key, ScreenData};

/// Points available for spending on a fresh draft.
pub const SKILL_POINTS: i32 = 200;

/// Starting value and floor of every skill.
pub const MIN_SKILL: i32 = 50;

/// Points moved per key press.
pub const SKILL_STEP: i32 = 10;

/// A named skill with its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Display name.
    pub name: &'static str,
    /// Current value.
    pub value: i32,
}

/// An in-progress custom hero.
///
/// Spent points plus remaining points always equal [`SKILL_POINTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateHeroDraft {
    skills: [Skill; 3],
    selected: usize,
    remaining_points: i32,
}

impl Default for CreateHeroDraft {
    fn default() -> Self {
        Self {
            skills: [
                Skill {
                    name: "Health",
                    value: MIN_SKILL,
                },
                Skill {
                    name: "Damage",
                    value: MIN_SKILL,
                },
                Skill {
                    name: "Defence",
                    value: MIN_SKILL,
                },
            ],
            selected: 0,
            remaining_points: SKILL_POINTS,
        }
    }
}

impl CreateHeroDraft {
    /// Skills in display order: health, damage, defence.
    #[must_use]
    pub const fn skills(&self) -> &[Skill; 3] {
        &self.skills
    }

    /// Index of the highlighted skill.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Points left to spend.
    #[must_use]
    pub const fn remaining_points(&self) -> i32 {
        self.remaining_points
    }

    /// Points spent above the skill floors.
    #[must_use]
    pub fn spent_points(&self) -> i32 {
        self.skills.iter().map(|skill| skill.value - MIN_SKILL).sum()
    }

    /// Stats of the finished hero.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        Stats::new(
            self.skills[0].value,
            self.skills[1].value,
            self.skills[2].value,
        )
    }

    /// Handle a key press.
    ///
    /// `+`/`>` spend a step on the highlighted skill, `-`/`<` refund one,
    /// Enter finishes the hero and Escape leaves the draft as it is.
    pub fn handle(&mut self, key: Key) -> GameCondition {
        let count = self.skills.len();
        match key {
            Key::Down => self.selected = (self.selected + 1) % count,
            Key::Up => self.selected = (self.selected + count - 1) % count,
            Key::Char('+' | '>') => self.raise(),
            Key::Char('-' | '<') => self.lower(),
            Key::Enter => return GameCondition::PlayAsCustom,
            Key::Escape => return GameCondition::MainMenu,
            _ => {}
        }
        GameCondition::CreateHero
    }

    fn raise(&mut self) {
        if self.remaining_points > 0 {
            self.skills[self.selected].value += SKILL_STEP;
            self.remaining_points -= SKILL_STEP;
        }
    }

    fn lower(&mut self) {
        let skill = &mut self.skills[self.selected];
        if skill.value > MIN_SKILL {
            skill.value -= SKILL_STEP;
            self.remaining_points += SKILL_STEP;
        }
    }

    /// Screen data for this state.
    #[must_use]
    pub fn render(&self) -> ScreenData<'_> {
        ScreenData::HeroCreation(HeroCreationView {
            skills: &self.skills,
            selected: self.selected,
            remaining_points: self.remaining_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(draft: &mut CreateHeroDraft, key: Key, times: usize) {
        for _ in 0..times {
            draft.handle(key);
        }
    }

    #[test]
    fn test_fresh_draft() {
        let draft = CreateHeroDraft::default();
        assert_eq!(draft.remaining_points(), SKILL_POINTS);
        assert_eq!(draft.spent_points(), 0);
        assert_eq!(draft.stats(), Stats::new(50, 50, 50));
    }

    #[test]
    fn test_spend_and_refund() {
        let mut draft = CreateHeroDraft::default();
        press(&mut draft, Key::Char('+'), 3);
        draft.handle(Key::Down);
        press(&mut draft, Key::Char('>'), 2);
        draft.handle(Key::Char('-'));

        assert_eq!(draft.stats(), Stats::new(80, 60, 50));
        assert_eq!(draft.remaining_points(), 160);
        assert_eq!(draft.spent_points() + draft.remaining_points(), SKILL_POINTS);
    }

    #[test]
    fn test_cannot_overspend() {
        let mut draft = CreateHeroDraft::default();
        press(&mut draft, Key::Char('+'), 19);
        assert_eq!(draft.remaining_points(), SKILL_STEP);
        draft.handle(Key::Char('+'));
        assert_eq!(draft.remaining_points(), 0);

        press(&mut draft, Key::Char('+'), 5);
        draft.handle(Key::Down);
        press(&mut draft, Key::Char('>'), 5);
        assert_eq!(draft.remaining_points(), 0);
        assert_eq!(draft.stats(), Stats::new(MIN_SKILL + SKILL_POINTS, MIN_SKILL, MIN_SKILL));
    }

    #[test]
    fn test_cannot_drop_below_floor() {
        let mut draft = CreateHeroDraft::default();
        draft.handle(Key::Up);
        assert_eq!(draft.selected(), 2);
        press(&mut draft, Key::Char('<'), 3);
        assert_eq!(draft.stats().defence, MIN_SKILL);
        assert_eq!(draft.remaining_points(), SKILL_POINTS);
    }

    #[test]
    fn test_exit_keys() {
        let mut draft = CreateHeroDraft::default();
        assert_eq!(draft.handle(Key::Char('x')), GameCondition::CreateHero);
        assert_eq!(draft.handle(Key::Escape), GameCondition::MainMenu);
        assert_eq!(draft.handle(Key::Enter), GameCondition::PlayAsCustom);
    }

    #[test]
    fn test_render() {
        let mut draft = CreateHeroDraft::default();
        draft.handle(Key::Down);
        draft.handle(Key::Char('+'));

        let ScreenData::HeroCreation(view) = draft.render() else {
            panic!("draft should render the creation view");
        };
        assert_eq!(view.selected, 1);
        assert_eq!(view.remaining_points, 190);
        assert_eq!(view.skills[1].value, 60);
    }
}
