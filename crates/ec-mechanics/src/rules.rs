//! Pure rule formulas used by the test engine.

/// A test glitches when more than half its pool shows glitch faces.
pub fn glitched(glitches: i32, pool: i32) -> bool {
    glitches > pool.max(0) / 2
}

/// A critical glitch is a glitch without a single hit.
pub fn critical_glitched(glitched: bool, hits: i32) -> bool {
    glitched && hits == 0
}

/// Hits meet the threshold.
pub fn success(hits: i32, threshold: i32) -> bool {
    hits >= threshold
}

/// Hits above the threshold, never negative. Without a threshold every hit
/// is a net hit.
pub fn net_hits(hits: i32, threshold: i32) -> i32 {
    if threshold > 0 {
        (hits - threshold).max(0)
    } else {
        hits.max(0)
    }
}

/// Penalty for the next extended test iteration.
pub fn next_extended_modifier(current: i32, step: i32) -> i32 {
    current - step.max(1)
}

/// An extended test may continue while it has dice left and its goal is
/// not yet reached.
pub fn can_extend_test(pool: i32, threshold: i32, extended_hits: i32) -> bool {
    if threshold > 0 && extended_hits >= threshold {
        return false;
    }
    pool > 0
}

/// Damage left after a defense. Dodged attacks deal nothing.
pub fn modified_damage(incoming: i32, defense_hits: i32, dodged: bool) -> i32 {
    if dodged {
        0
    } else {
        (incoming - defense_hits).max(0)
    }
}

/// Drain a spell causes. Spells always cause at least 2.
pub fn spell_drain(base: i32) -> i32 {
    base.max(2)
}

/// The attribute a quality lets the actor regain Edge on, lowercase.
///
/// `Attribute Mastery: Agility` covers agility; `Analytical Mind` covers logic.
pub fn edge_quality_attribute(quality: &str) -> Option<String> {
    let quality = quality.trim();
    if let Some((prefix, attribute)) = quality.split_once(':') {
        if prefix.trim().eq_ignore_ascii_case("attribute mastery") {
            let attribute = attribute.trim();
            return (!attribute.is_empty()).then(|| attribute.to_lowercase());
        }
        return None;
    }
    quality
        .eq_ignore_ascii_case("analytical mind")
        .then(|| "logic".to_string())
}
