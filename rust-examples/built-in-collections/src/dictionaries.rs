//! Dictionaries
//!
//! A map whose values are a sum type (`Setting`) can hold text, numbers and
//! flags while still being checked: each read has to match on the variant.
//!
//! Lookups return `Option` because no key is guaranteed to be there.
//! Updates can report the value they replaced. Two small helpers round out
//! the lesson: merging user overrides into defaults, and building a map
//! from a sequence of pairs.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use playground_common::mapping::{map_from_pairs, map_values, merge_into, update_value};
use playground_common::{Setting, Settings, Transcript};

pub fn default_settings() -> Settings {
    Settings::new()
        .define("Airplane Mode", Setting::Bool(true))
        .define("Name", Setting::Text("My iPhone".to_string()))
        .define("Volume", Setting::Int(5))
}

/// Localizes a copy of `defaults`; returns it with the name it replaced last.
pub fn localized(defaults: &Settings) -> (Settings, Option<Setting>) {
    let localized = defaults.define_all([
        ("Name".to_string(), Setting::Text("Mein iPhone".to_string())),
        ("Do Not Disturb".to_string(), Setting::Bool(true)),
    ]);
    localized.update_value("Name", Setting::Text("Il mio iPhone".to_string()))
}

pub fn user_overrides() -> Vec<(String, Setting)> {
    vec![(
        "Name".to_string(),
        Setting::Text("Jane's iPhone".to_string()),
    )]
}

/// Flat merge: copy the defaults into a plain map and overwrite.
pub fn merged_settings(defaults: &Settings) -> HashMap<String, Setting> {
    let mut settings: HashMap<String, Setting> = defaults.resolved().into_iter().collect();
    let overwritten = merge_into(&mut settings, user_overrides());
    debug!("user overrides replaced {overwritten} default(s)");
    settings
}

/// Layered merge: overrides sit on top and defaults show through.
pub fn layered_settings(defaults: &Settings) -> Settings {
    defaults.overridden_by(user_overrides())
}

/// Drops the user's name so the default one shows through again.
pub fn reset_name(layered: &Settings) -> Settings {
    layered.remove("Name")
}

/// Present, but only because a lower layer defines it.
pub fn is_inherited(settings: &Settings, name: &str) -> bool {
    settings.contains(name) && !settings.contains_locally(name)
}

// Typed reads: a missing key and a key of the wrong kind both fall back.

pub fn device_name(settings: &Settings) -> &str {
    settings
        .lookup("Name")
        .and_then(Setting::as_text)
        .unwrap_or("Unnamed")
}

pub fn airplane_mode(settings: &Settings) -> bool {
    settings
        .lookup("Airplane Mode")
        .and_then(Setting::as_bool)
        .unwrap_or(false)
}

pub fn volume(settings: &Settings) -> i64 {
    settings
        .lookup("Volume")
        .and_then(Setting::as_int)
        .unwrap_or(0)
}

/// "Alarm: 1" to "Alarm: 4", all off.
pub fn default_alarms() -> HashMap<String, bool> {
    map_from_pairs((1..5).map(|n| (format!("Alarm: {n}"), false)))
}

/// Switches one alarm on; returns the alarms and whether it was on before.
pub fn with_alarm_on(number: u32) -> (HashMap<String, bool>, Option<bool>) {
    let mut alarms = default_alarms();
    let previous = update_value(&mut alarms, format!("Alarm: {number}"), true);
    (alarms, previous)
}

/// Renders every setting as text, handling each variant explicitly.
pub fn settings_as_strings(settings: &HashMap<String, Setting>) -> HashMap<String, String> {
    map_values(settings, |setting| match setting {
        Setting::Text(text) => text.clone(),
        Setting::Int(number) => number.to_string(),
        Setting::Bool(value) => value.to_string(),
    })
}

fn sorted<V: Clone>(map: &HashMap<String, V>) -> BTreeMap<String, V> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Dictionaries");
    let defaults = default_settings();

    t.record("Name", &defaults.lookup("Name"));
    t.record("Ringtone", &defaults.lookup("Ringtone"));
    t.record("device name", &device_name(&defaults));
    t.record("airplane mode", &airplane_mode(&defaults));
    t.record("volume", &volume(&defaults));

    let (local, old_name) = localized(&defaults);
    t.record("localized Name", &local.lookup("Name"));
    t.record("replaced Name", &old_name);
    t.record("defaults Name afterwards", &defaults.lookup("Name"));

    let merged = merged_settings(&defaults);
    t.record("merged", &sorted(&merged));

    let layered = layered_settings(&defaults);
    t.record("layered", &layered.to_sorted());
    t.record("layered depth", &layered.depth());
    t.record("entries in user layer", &layered.len());
    t.record("Volume inherited", &is_inherited(&layered, "Volume"));
    t.record("Name after reset", &device_name(&reset_name(&layered)));

    let (alarms, was_on) = with_alarm_on(2);
    t.record("alarms", &sorted(&alarms));
    t.record("Alarm: 2 was on", &was_on);
    t.record("as strings", &sorted(&settings_as_strings(&merged)));
    t.record("layered as strings", &sorted(&layered.as_strings()));
    t
}
