use crate::{dsp::logic::LogicFunction, engine::LogicSettings};

/// Number of selector groups (one per output).
pub const GROUP_COUNT: usize = 2;
/// Total lights on the panel.
pub const LIGHT_COUNT: usize = GROUP_COUNT * LogicFunction::COUNT;

/// Lit/unlit state of the function lights, five per selector group.
///
/// Derived from the selectors only. At most one light per group is lit, and
/// exactly one whenever the group's selector is in range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    lit: [Option<LogicFunction>; GROUP_COUNT],
}

impl IndicatorState {
    pub fn from_selectors(selector_1: i32, selector_2: i32) -> Self {
        Self {
            lit: [
                LogicFunction::from_index(selector_1),
                LogicFunction::from_index(selector_2),
            ],
        }
    }

    pub fn from_settings(settings: &LogicSettings) -> Self {
        Self::from_selectors(settings.selector_1, settings.selector_2)
    }

    /// Index of the lit light in `group`, if any.
    pub fn lit(&self, group: usize) -> Option<usize> {
        self.lit.get(group).copied().flatten().map(LogicFunction::index)
    }

    pub fn function(&self, group: usize) -> Option<LogicFunction> {
        self.lit.get(group).copied().flatten()
    }

    pub fn is_lit(&self, group: usize, index: usize) -> bool {
        self.lit(group) == Some(index)
    }

    /// Flat light index, `group * 5 + function`.
    #[inline]
    pub const fn light_index(group: usize, index: usize) -> usize {
        group * LogicFunction::COUNT + index
    }

    /// Write intensities into the host's light vector (1.0 lit, 0.0 off).
    pub fn write_lights(&self, lights: &mut [f32]) {
        debug_assert!(lights.len() >= LIGHT_COUNT);

        for (i, light) in lights.iter_mut().take(LIGHT_COUNT).enumerate() {
            let group = i / LogicFunction::COUNT;
            let index = i % LogicFunction::COUNT;
            *light = if self.is_lit(group, index) { 1.0 } else { 0.0 };
        }
    }

    pub fn intensities(&self) -> [f32; LIGHT_COUNT] {
        let mut lights = [0.0; LIGHT_COUNT];
        self.write_lights(&mut lights);
        lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_light_per_group_in_range() {
        for s1 in 0..5 {
            for s2 in 0..5 {
                let state = IndicatorState::from_selectors(s1, s2);
                let lights = state.intensities();

                let group_1: f32 = lights[..5].iter().sum();
                let group_2: f32 = lights[5..].iter().sum();
                assert_eq!(group_1, 1.0);
                assert_eq!(group_2, 1.0);
                assert_eq!(lights[IndicatorState::light_index(0, s1 as usize)], 1.0);
                assert_eq!(lights[IndicatorState::light_index(1, s2 as usize)], 1.0);
            }
        }
    }

    #[test]
    fn out_of_range_group_is_dark() {
        let state = IndicatorState::from_selectors(-1, 7);

        assert_eq!(state.lit(0), None);
        assert_eq!(state.lit(1), None);
        assert!(state.intensities().iter().all(|&l| l == 0.0));
    }

    #[test]
    fn groups_are_independent() {
        let state = IndicatorState::from_selectors(3, 9);
        let lights = state.intensities();

        assert_eq!(lights, [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(state.function(0), Some(LogicFunction::Or));
        assert_eq!(state.function(1), None);
    }

    #[test]
    fn unknown_group_is_unlit() {
        let state = IndicatorState::from_selectors(0, 0);
        assert_eq!(state.lit(2), None);
        assert!(!state.is_lit(5, 0));
    }
}
