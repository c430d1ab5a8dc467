//! Arrangement of a whole token set.
//!
//! A plain scatter splits every category into interior and peripheral tokens.
//! With a selection present, the chosen word of each category is moved to its
//! highlight slot, slots are pushed apart until they stop overlapping (or the
//! pass cap is hit), and every other token is repelled from the slots.

use crate::config::LayoutConfig;
use crate::placement::{
    jitter, sanitize_percent, sample_interior_position, sample_peripheral_position, PositionSeed,
};
use crate::types::*;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Outcome of the highlight overlap resolution loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapResolution {
    /// Number of passes executed
    pub passes: usize,
    /// Whether a pass completed without finding any overlapping pair
    pub converged: bool,
}

/// Summary of one arrangement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrangementReport {
    /// Tokens flagged highlighted, in highlight order
    pub highlighted: Vec<TokenId>,
    /// Number of tokens placed in the central band
    pub interior: usize,
    /// Overlap resolution result; `None` when nothing was highlighted
    pub overlap: Option<OverlapResolution>,
}

/// Number of interior tokens for a category of `count` tokens.
pub fn interior_count(config: &LayoutConfig, count: usize) -> usize {
    let by_ratio = (count as f32 * config.interior_ratio).floor() as usize;
    by_ratio.max(config.min_interior_count).min(count)
}

/// Picks the interior tokens of every category.
///
/// Each category is shuffled independently and the first
/// `max(min_interior_count, floor(count * interior_ratio))` tokens become
/// interior. A fresh draw is made on every call.
pub fn choose_interior_subset<'a, I, R>(
    tokens: I,
    config: &LayoutConfig,
    rng: &mut R,
) -> HashSet<TokenId>
where
    I: IntoIterator<Item = &'a Token>,
    R: Rng + ?Sized,
{
    let mut by_category: BTreeMap<Category, Vec<TokenId>> = BTreeMap::new();
    for token in tokens {
        by_category.entry(token.category).or_default().push(token.id);
    }

    let mut interior = HashSet::new();
    for ids in by_category.values_mut() {
        ids.shuffle(rng);
        let take = interior_count(config, ids.len());
        interior.extend(ids.iter().take(take).copied());
    }
    interior
}

/// Scatters every token without highlighting.
pub fn layout_initial<R: Rng + ?Sized>(
    tokens: &mut TokenSet,
    config: &LayoutConfig,
    rng: &mut R,
) -> ArrangementReport {
    let interior = choose_interior_subset(tokens.iter(), config, rng);
    for token in tokens.iter_mut() {
        let seed = scatter_seed(interior.contains(&token.id), config, rng);
        token.position = seed.into();
        token.highlighted = false;
    }
    debug!(
        "Scattered {} tokens ({} interior)",
        tokens.len(),
        interior.len()
    );
    ArrangementReport {
        highlighted: Vec::new(),
        interior: interior.len(),
        overlap: None,
    }
}

/// Arranges every token around an optional selection.
///
/// Without a selection this is [`layout_initial`]. With one, the first
/// token of each category whose text equals the chosen word is highlighted;
/// a category with no matching token simply has no highlight.
pub fn layout_with_selection<R: Rng + ?Sized>(
    tokens: &mut TokenSet,
    selection: Option<&Selection>,
    config: &LayoutConfig,
    rng: &mut R,
) -> ArrangementReport {
    let Some(selection) = selection else {
        return layout_initial(tokens, config, rng);
    };

    let highlighted: HashSet<TokenId> = Category::ALL
        .iter()
        .filter_map(|c| tokens.category(*c).iter().find(|t| selection.matches(t)))
        .map(|t| t.id)
        .collect();

    // Drawn over whole categories; a highlighted token in the subset keeps its slot.
    let interior = choose_interior_subset(tokens.iter(), config, rng);
    let interior_placed = interior.difference(&highlighted).count();

    let mut slots: Vec<HighlightSlot> = Vec::new();
    let mut slot_rotations: BTreeMap<Category, f32> = BTreeMap::new();
    let mut candidates: HashMap<TokenId, PositionSeed> = HashMap::new();
    for token in tokens.iter() {
        if highlighted.contains(&token.id) {
            let (slot, rotation) = sample_highlight_slot(token.category, config, rng);
            slots.push(slot);
            slot_rotations.insert(token.category, rotation);
        } else {
            let seed = scatter_seed(interior.contains(&token.id), config, rng);
            candidates.insert(token.id, seed);
        }
    }

    let overlap = if slots.is_empty() {
        None
    } else {
        Some(resolve_highlight_overlaps(&mut slots, config))
    };

    let committed: BTreeMap<Category, PositionRecord> = slots
        .iter()
        .map(|slot| {
            let rotation = slot_rotations.get(&slot.category).copied().unwrap_or(0.0);
            let record = PositionRecord::new(slot.left_percent, slot.top_percent, rotation);
            (slot.category, record.sanitized())
        })
        .collect();

    for token in tokens.iter_mut() {
        token.highlighted = highlighted.contains(&token.id);
        if token.highlighted {
            if let Some(record) = committed.get(&token.category) {
                token.position = *record;
            }
        } else if let Some(seed) = candidates.get(&token.id) {
            let (left, top) = apply_repulsion(seed.left_percent, seed.top_percent, &slots, config);
            token.position = PositionRecord::new(left, top, seed.rotation_degrees);
        }
    }

    let mut ordered: Vec<&Token> = tokens.highlighted().collect();
    ordered.sort_by_key(|t| t.category.highlight_index());
    let highlighted: Vec<TokenId> = ordered.into_iter().map(|t| t.id).collect();

    debug!(
        "Arranged {} tokens around \"{}\" ({} highlighted, {} interior)",
        tokens.len(),
        selection.phrase(),
        highlighted.len(),
        interior_placed
    );
    ArrangementReport {
        highlighted,
        interior: interior_placed,
        overlap,
    }
}

/// Samples the highlight slot for a category together with its rotation.
///
/// The horizontal stop is fixed by `Category::HIGHLIGHT_ORDER`; the vertical
/// position and the rotation are jittered around the center line. The slot
/// is kept inside `highlight_bounds` and `[0, 100]`.
pub fn sample_highlight_slot<R: Rng + ?Sized>(
    category: Category,
    config: &LayoutConfig,
    rng: &mut R,
) -> (HighlightSlot, f32) {
    let (left, top) = config.highlight_bounds.clamp(
        config.highlight_stops[category.highlight_index()],
        50.0 + jitter(rng, config.highlight_vertical_range),
    );
    let slot = HighlightSlot {
        category,
        left_percent: sanitize_percent(left),
        top_percent: sanitize_percent(top),
    };
    (slot, jitter(rng, config.highlight_rotation_range))
}

/// Pushes highlight slots apart until every pair is at least
/// `min_highlight_spacing` apart, for at most `overlap_max_iterations` passes.
///
/// Each overlapping pair moves apart along the line joining it by half the
/// deficit per member; pushed slots are clamped into `highlight_bounds`.
/// Coincident slots separate along the horizontal axis. Hitting the pass cap
/// leaves the slots as they are.
pub fn resolve_highlight_overlaps(
    slots: &mut [HighlightSlot],
    config: &LayoutConfig,
) -> OverlapResolution {
    let min_spacing = config.min_highlight_spacing;
    let bounds = config.highlight_bounds;

    for pass in 1..=config.overlap_max_iterations {
        let mut has_overlap = false;

        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                let dx = slots[i].left_percent - slots[j].left_percent;
                let dy = slots[i].top_percent - slots[j].top_percent;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance >= min_spacing {
                    continue;
                }

                has_overlap = true;
                let push = (min_spacing - distance) / 2.0;
                let (ux, uy) = if distance > 0.0 {
                    (dx / distance, dy / distance)
                } else {
                    (1.0, 0.0)
                };

                let (li, ti) = bounds.clamp(
                    slots[i].left_percent + ux * push,
                    slots[i].top_percent + uy * push,
                );
                let (lj, tj) = bounds.clamp(
                    slots[j].left_percent - ux * push,
                    slots[j].top_percent - uy * push,
                );
                slots[i].left_percent = li;
                slots[i].top_percent = ti;
                slots[j].left_percent = lj;
                slots[j].top_percent = tj;
            }
        }

        if !has_overlap {
            return OverlapResolution {
                passes: pass,
                converged: true,
            };
        }
    }

    debug!(
        "Highlight overlap resolution stopped at the {}-pass cap",
        config.overlap_max_iterations
    );
    OverlapResolution {
        passes: config.overlap_max_iterations,
        converged: false,
    }
}

/// Pushes a candidate position away from every slot closer than the
/// repulsion radius, then clamps it into `[0, 100]`.
///
/// Pushes are measured from the original candidate and add up across
/// slots. A candidate exactly on a slot is not moved by that slot.
pub fn apply_repulsion(
    left_percent: f32,
    top_percent: f32,
    slots: &[HighlightSlot],
    config: &LayoutConfig,
) -> (f32, f32) {
    let radius = config.repulsion_radius;
    let mut left = left_percent;
    let mut top = top_percent;

    for slot in slots {
        let dx = left_percent - slot.left_percent;
        let dy = top_percent - slot.top_percent;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance < radius && distance > 0.0 {
            let push = (radius - distance) * config.repulsion_strength;
            left += dx / distance * push;
            top += dy / distance * push;
        }
    }

    (left.clamp(0.0, 100.0), top.clamp(0.0, 100.0))
}

fn scatter_seed<R: Rng + ?Sized>(
    interior: bool,
    config: &LayoutConfig,
    rng: &mut R,
) -> PositionSeed {
    if interior {
        sample_interior_position(config, rng)
    } else {
        sample_peripheral_position(config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PercentBounds;
    use crate::samples::default_words;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_bounds(set: &TokenSet) -> bool {
        set.iter().all(|t| {
            (0.0..=100.0).contains(&t.position.left_percent)
                && (0.0..=100.0).contains(&t.position.top_percent)
        })
    }

    fn slot(category: Category, left: f32, top: f32) -> HighlightSlot {
        HighlightSlot {
            category,
            left_percent: left,
            top_percent: top,
        }
    }

    fn single_word_set() -> TokenSet {
        TokenSet::from_words([
            (Category::Verb, vec!["ship"]),
            (Category::Noun, vec!["code"]),
            (Category::Adjective, vec!["fast"]),
            (Category::Outcome, vec!["joy"]),
        ])
    }

    #[test]
    fn test_interior_count_rules() {
        let config = LayoutConfig::default();
        assert_eq!(interior_count(&config, 0), 0);
        assert_eq!(interior_count(&config, 1), 1);
        assert_eq!(interior_count(&config, 4), 2);
        assert_eq!(interior_count(&config, 15), 3);
        assert_eq!(interior_count(&config, 20), 5);
    }

    #[test]
    fn test_interior_subset_is_per_category() {
        let config = LayoutConfig::default();
        let set = TokenSet::from_words(default_words());
        let mut rng = StdRng::seed_from_u64(1);
        let interior = choose_interior_subset(set.iter(), &config, &mut rng);
        for category in Category::ALL {
            let tokens = set.category(category);
            let chosen = tokens.iter().filter(|t| interior.contains(&t.id)).count();
            assert_eq!(chosen, interior_count(&config, tokens.len()));
        }
    }

    #[test]
    fn test_interior_subset_varies_between_calls() {
        let config = LayoutConfig::default();
        let set = TokenSet::from_words(default_words());
        let mut rng = StdRng::seed_from_u64(5);
        let first = choose_interior_subset(set.iter(), &config, &mut rng);
        let differs =
            (0..10).any(|_| choose_interior_subset(set.iter(), &config, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_layout_initial_places_interior_tokens_in_center_band() {
        let config = LayoutConfig::default();
        let mut set = TokenSet::from_words(default_words());
        let mut rng = StdRng::seed_from_u64(9);
        let report = layout_initial(&mut set, &config, &mut rng);

        assert!(in_bounds(&set));
        assert!(report.highlighted.is_empty());
        assert_eq!(report.overlap, None);
        let central = set
            .iter()
            .filter(|t| {
                (40.0..=60.0).contains(&t.position.left_percent)
                    && (40.0..=60.0).contains(&t.position.top_percent)
            })
            .count();
        // Peripheral strips never reach the central band.
        assert_eq!(central, report.interior);
        assert_eq!(set.highlighted().count(), 0);
    }

    #[test]
    fn test_single_word_categories_fill_the_highlight_stops() {
        let config = LayoutConfig::default();
        let mut set = single_word_set();
        let selection = Selection::new()
            .with(Category::Verb, "ship")
            .with(Category::Noun, "code")
            .with(Category::Adjective, "fast")
            .with(Category::Outcome, "joy");
        let mut rng = StdRng::seed_from_u64(21);

        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        assert_eq!(report.highlighted.len(), 4);
        assert_eq!(
            report.overlap,
            Some(OverlapResolution {
                passes: 1,
                converged: true
            })
        );
        let expected = [
            (Category::Verb, 25.0),
            (Category::Adjective, 40.0),
            (Category::Noun, 60.0),
            (Category::Outcome, 75.0),
        ];
        for (id, (category, left)) in report.highlighted.iter().zip(expected) {
            let token = set.get(*id).unwrap();
            assert_eq!(token.category, category);
            assert!(token.highlighted);
            assert_eq!(token.position.left_percent, left);
            assert!((token.position.top_percent - 50.0).abs() <= 3.0);
            assert!(token.position.rotation_degrees.abs() <= 4.0);
        }
    }

    #[test]
    fn test_only_matching_tokens_are_highlighted() {
        let config = LayoutConfig::default();
        let mut set = TokenSet::from_words(default_words());
        let selection = Selection::new()
            .with(Category::Verb, "deploy")
            .with(Category::Noun, "cache")
            .with(Category::Adjective, "robust")
            .with(Category::Outcome, "clarity");
        let mut rng = StdRng::seed_from_u64(33);

        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        assert!(in_bounds(&set));
        assert_eq!(report.highlighted.len(), 4);
        for token in set.iter() {
            assert_eq!(token.highlighted, selection.matches(token), "{}", token.text);
        }
    }

    #[test]
    fn test_duplicate_words_highlight_only_the_first() {
        let config = LayoutConfig::default();
        let mut set = TokenSet::from_words([(Category::Verb, vec!["ship", "ship", "test"])]);
        let first = set.category(Category::Verb)[0].id;
        let selection = Selection::new().with(Category::Verb, "ship");
        let mut rng = StdRng::seed_from_u64(2);

        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        assert_eq!(report.highlighted, vec![first]);
        assert_eq!(set.highlighted().count(), 1);
    }

    #[test]
    fn test_empty_category_has_no_highlight() {
        let config = LayoutConfig::default();
        let mut set = TokenSet::from_words([
            (Category::Verb, vec!["ship"]),
            (Category::Noun, vec![]),
        ]);
        let selection = Selection::new()
            .with(Category::Verb, "ship")
            .with(Category::Noun, "code");
        let mut rng = StdRng::seed_from_u64(4);

        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        assert_eq!(report.highlighted.len(), 1);
        assert_eq!(set.get(report.highlighted[0]).unwrap().category, Category::Verb);
    }

    #[test]
    fn test_unmatched_selection_places_nothing_in_slots() {
        let config = LayoutConfig::default();
        let mut set = single_word_set();
        let selection = Selection::new().with(Category::Verb, "nothing-like-this");
        let mut rng = StdRng::seed_from_u64(8);

        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        assert!(report.highlighted.is_empty());
        assert_eq!(report.overlap, None);
        assert!(in_bounds(&set));
    }

    #[test]
    fn test_absent_selection_clears_previous_highlight() {
        let config = LayoutConfig::default();
        let mut set = single_word_set();
        let selection = Selection::new().with(Category::Noun, "code");
        let mut rng = StdRng::seed_from_u64(12);

        layout_with_selection(&mut set, Some(&selection), &config, &mut rng);
        assert_eq!(set.highlighted().count(), 1);

        let report = layout_with_selection(&mut set, None, &config, &mut rng);
        assert!(report.highlighted.is_empty());
        assert_eq!(set.highlighted().count(), 0);
    }

    #[test]
    fn test_positions_stay_in_bounds_across_seeds() {
        let config = LayoutConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut set = TokenSet::from_words(default_words());
            layout_initial(&mut set, &config, &mut rng);
            assert!(in_bounds(&set));

            let selection: Selection = Category::ALL
                .iter()
                .map(|c| (*c, set.category(*c)[seed as usize % 15].text.clone()))
                .collect();
            let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);
            assert!(in_bounds(&set));
            assert!(report.highlighted.len() <= 4);
        }
    }

    #[test]
    fn test_rerunning_resolution_confirms_outcome() {
        let config = LayoutConfig::default();
        let mut set = single_word_set();
        let selection: Selection = set
            .iter()
            .map(|t| (t.category, t.text.clone()))
            .collect();
        let mut rng = StdRng::seed_from_u64(17);
        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        let mut slots: Vec<HighlightSlot> = report
            .highlighted
            .iter()
            .filter_map(|id| set.get(*id))
            .map(|t| slot(t.category, t.position.left_percent, t.position.top_percent))
            .collect();
        let before = slots.clone();
        let rerun = resolve_highlight_overlaps(&mut slots, &config);

        assert!(report.overlap.unwrap().converged);
        assert_eq!(rerun, OverlapResolution { passes: 1, converged: true });
        assert_eq!(slots, before);
    }

    #[test]
    fn test_coincident_slots_separate_horizontally() {
        let config = LayoutConfig::default();
        let mut slots = vec![
            slot(Category::Verb, 50.0, 50.0),
            slot(Category::Noun, 50.0, 50.0),
        ];
        let result = resolve_highlight_overlaps(&mut slots, &config);

        assert_eq!(result, OverlapResolution { passes: 2, converged: true });
        assert_eq!(slots[0].left_percent, 51.5);
        assert_eq!(slots[1].left_percent, 48.5);
        assert_eq!(slots[0].top_percent, 50.0);
    }

    #[test]
    fn test_pushed_slots_stay_in_highlight_bounds() {
        let config = LayoutConfig::default();
        let mut slots = vec![
            slot(Category::Verb, 70.0, 60.0),
            slot(Category::Adjective, 69.0, 59.5),
            slot(Category::Noun, 69.5, 60.0),
        ];
        resolve_highlight_overlaps(&mut slots, &config);
        for s in &slots {
            assert!(config.highlight_bounds.contains(s.left_percent, s.top_percent));
        }
    }

    #[test]
    fn test_resolution_gives_up_at_the_cap() {
        let config = LayoutConfig {
            min_highlight_spacing: 500.0,
            ..LayoutConfig::default()
        };
        let mut slots = vec![
            slot(Category::Verb, 40.0, 50.0),
            slot(Category::Noun, 60.0, 50.0),
        ];
        let result = resolve_highlight_overlaps(&mut slots, &config);

        assert_eq!(result, OverlapResolution { passes: 10, converged: false });
        assert_eq!(slots[0].left_percent, 25.0);
        assert_eq!(slots[1].left_percent, 75.0);
    }

    #[test]
    fn test_repulsion_pushes_away_from_slot() {
        let config = LayoutConfig::default();
        let slots = [slot(Category::Verb, 50.0, 50.0)];

        // 5 units away: pushed by (15 - 5) * 1.5 = 15.
        let (left, top) = apply_repulsion(55.0, 50.0, &slots, &config);
        assert!((left - 70.0).abs() < 1e-4);
        assert_eq!(top, 50.0);

        // Outside the radius: untouched.
        assert_eq!(apply_repulsion(80.0, 50.0, &slots, &config), (80.0, 50.0));

        // On the slot: untouched.
        assert_eq!(apply_repulsion(50.0, 50.0, &slots, &config), (50.0, 50.0));
    }

    #[test]
    fn test_repulsion_accumulates_and_clamps() {
        let config = LayoutConfig::default();
        let slots = [
            slot(Category::Verb, 40.0, 50.0),
            slot(Category::Noun, 60.0, 50.0),
        ];
        // Equidistant between two slots on the axis: pushes cancel out.
        let (left, _) = apply_repulsion(50.0, 50.0, &slots, &config);
        assert!((left - 50.0).abs() < 1e-4);

        // Near a slot close to the border: result is clamped.
        let edge = [slot(Category::Verb, 95.0, 2.0)];
        let (left, top) = apply_repulsion(97.0, 1.0, &edge, &config);
        assert_eq!(left, 100.0);
        assert_eq!(top, 0.0);
    }

    #[test]
    fn test_single_slot_repulsion_clears_the_radius() {
        let config = LayoutConfig::default();
        let slots = [slot(Category::Verb, 50.0, 50.0)];
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..200 {
            let seed = sample_interior_position(&config, &mut rng);
            let (left, top) = apply_repulsion(seed.left_percent, seed.top_percent, &slots, &config);
            let distance = ((left - 50.0).powi(2) + (top - 50.0).powi(2)).sqrt();
            if (seed.left_percent, seed.top_percent) != (50.0, 50.0) {
                assert!(distance >= config.repulsion_radius - 1e-3);
            }
        }
    }

    #[test]
    fn test_highlights_stay_in_percent_space_with_wild_stops() {
        let config = LayoutConfig {
            highlight_stops: [-20.0, 40.0, 60.0, 130.0],
            highlight_vertical_range: 300.0,
            highlight_bounds: PercentBounds {
                left_min: -50.0,
                left_max: 150.0,
                top_min: -50.0,
                top_max: 150.0,
            },
            ..LayoutConfig::default()
        };
        let selection: Selection = single_word_set()
            .iter()
            .map(|t| (t.category, t.text.clone()))
            .collect();
        for seed in 0..20 {
            let mut set = single_word_set();
            let mut rng = StdRng::seed_from_u64(seed);
            let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);
            assert_eq!(report.highlighted.len(), 4);
            assert!(in_bounds(&set));
        }
    }

    #[test]
    fn test_default_slots_stay_in_highlight_bounds() {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(40);
        for _ in 0..100 {
            for category in Category::HIGHLIGHT_ORDER {
                let (slot, _) = sample_highlight_slot(category, &config, &mut rng);
                assert!(config.highlight_bounds.contains(slot.left_percent, slot.top_percent));
            }
        }
    }

    #[test]
    fn test_selection_pass_repels_other_tokens() {
        let config = LayoutConfig {
            highlight_stops: [50.0, 40.0, 60.0, 75.0],
            interior_ratio: 1.0,
            ..LayoutConfig::default()
        };
        let nouns: Vec<String> = (0..20).map(|i| format!("noun{i}")).collect();
        let mut set = TokenSet::from_words([
            (Category::Verb, vec!["ship".to_string()]),
            (Category::Noun, nouns),
        ]);
        let selection = Selection::new().with(Category::Verb, "ship");
        let mut rng = StdRng::seed_from_u64(61);

        let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);

        assert_eq!(report.interior, 20);
        let anchor = set.get(report.highlighted[0]).unwrap().position;
        assert_eq!(anchor.left_percent, 50.0);
        for token in set.iter().filter(|t| !t.highlighted) {
            let dx = token.position.left_percent - anchor.left_percent;
            let dy = token.position.top_percent - anchor.top_percent;
            let distance = (dx * dx + dy * dy).sqrt();
            let pinned = [token.position.left_percent, token.position.top_percent]
                .iter()
                .any(|v| *v == 0.0 || *v == 100.0);
            assert!(
                distance >= config.repulsion_radius - 1e-3 || pinned,
                "{} at distance {distance}",
                token.text
            );
        }
    }

    #[test]
    fn test_interior_draw_includes_highlighted_tokens() {
        let config = LayoutConfig::default();
        let selection = Selection::new().with(Category::Verb, "a");
        let mut counts = Vec::new();
        for seed in 0..40 {
            let mut set = TokenSet::from_words([(Category::Verb, vec!["a", "b", "c", "d"])]);
            let mut rng = StdRng::seed_from_u64(seed);
            let report = layout_with_selection(&mut set, Some(&selection), &config, &mut rng);
            counts.push(report.interior);
        }
        // Two of four are drawn; the highlighted one sometimes takes a place.
        assert!(counts.iter().all(|c| (1..=2).contains(c)));
        assert!(counts.contains(&1));
        assert!(counts.contains(&2));
    }
}
