// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Derives a display status, message and launch link for every add-on
//! registered on the hub, using the add-on's per-cluster instance.

use crate::constants::{annotations, conditions};
use crate::types::addon::{annotation, has_annotations};
use crate::types::{ClusterManagementAddOn, Condition, ManagedClusterAddOn};
use kube::ResourceExt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display state of an add-on, in precedence order
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddonStatus {
    Degraded,
    Progressing,
    Available,
    Unknown,
    Disabled,
}

impl AddonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddonStatus::Degraded => "Degraded",
            AddonStatus::Progressing => "Progressing",
            AddonStatus::Available => "Available",
            AddonStatus::Unknown => "Unknown",
            AddonStatus::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for AddonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition types the resolver looks at. Anything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConditionKind {
    Degraded,
    Progressing,
    Available,
}

impl ConditionKind {
    fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::Degraded => "Degraded",
            ConditionKind::Progressing => "Progressing",
            ConditionKind::Available => "Available",
        }
    }
}

struct StatusRule {
    condition: ConditionKind,
    required_status: &'static str,
    outcome: AddonStatus,
}

/// Evaluated top to bottom, first match wins
const STATUS_RULES: [StatusRule; 3] = [
    StatusRule {
        condition: ConditionKind::Degraded,
        required_status: conditions::TRUE,
        outcome: AddonStatus::Degraded,
    },
    StatusRule {
        condition: ConditionKind::Progressing,
        required_status: conditions::TRUE,
        outcome: AddonStatus::Progressing,
    },
    StatusRule {
        condition: ConditionKind::Available,
        required_status: conditions::TRUE,
        outcome: AddonStatus::Available,
    },
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchLink {
    pub display_text: String,
    pub href: String,
}

/// Display-ready summary of one add-on
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub name: String,
    pub status: AddonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_link: Option<LaunchLink>,
}

/// Build one summary per definition, in definition order.
pub fn map_addons(
    definitions: &[ClusterManagementAddOn],
    instances: &[ManagedClusterAddOn],
) -> Vec<Addon> {
    definitions
        .iter()
        .map(|definition| {
            let instance = find_instance(definition, instances);
            let (status, message) = display_status(instance);
            Addon {
                name: definition.name_any(),
                status,
                message,
                launch_link: launch_link(definition, instance),
            }
        })
        .collect()
}

fn find_instance<'a>(
    definition: &ClusterManagementAddOn,
    instances: &'a [ManagedClusterAddOn],
) -> Option<&'a ManagedClusterAddOn> {
    instances
        .iter()
        .find(|instance| instance.metadata.name == definition.metadata.name)
}

fn first_condition(conditions: &[Condition], kind: ConditionKind) -> Option<&Condition> {
    conditions
        .iter()
        .find(|c| c.condition_type == kind.as_str())
}

fn display_status(instance: Option<&ManagedClusterAddOn>) -> (AddonStatus, Option<String>) {
    let Some(reported) = instance.and_then(|i| i.conditions()) else {
        return (AddonStatus::Disabled, None);
    };

    for rule in &STATUS_RULES {
        if let Some(condition) = first_condition(reported, rule.condition)
            .filter(|c| c.status == rule.required_status)
        {
            return (rule.outcome, condition.message.clone());
        }
    }

    let any_false = STATUS_RULES.iter().any(|rule| {
        first_condition(reported, rule.condition).is_some_and(|c| c.status == conditions::FALSE)
    });
    if any_false {
        return (AddonStatus::Progressing, Some(String::new()));
    }

    // The status label doubles as the message here
    (AddonStatus::Unknown, Some(AddonStatus::Unknown.to_string()))
}

/// The link exists when either resource carries both annotations. Each field
/// is then sourced from the instance first, even if the instance only has one
/// of the two keys.
fn launch_link(
    definition: &ClusterManagementAddOn,
    instance: Option<&ManagedClusterAddOn>,
) -> Option<LaunchLink> {
    let instance = instance?;
    let keys = [annotations::LAUNCH_LINK, annotations::LAUNCH_LINK_TEXT];

    if !has_annotations(instance, &keys) && !has_annotations(definition, &keys) {
        return None;
    }

    let pick = |key: &str| {
        annotation(instance, key)
            .or_else(|| annotation(definition, key))
            .unwrap_or_default()
            .to_string()
    };

    Some(LaunchLink {
        display_text: pick(annotations::LAUNCH_LINK_TEXT),
        href: pick(annotations::LAUNCH_LINK),
    })
}
