//! Two-stage intake wizard.

use serde::{Deserialize, Serialize};

use super::error::IntakeFormError;
use super::form::{DietProfile, ProfileIntakeForm};

/// Wizard stage.
///
/// 向导阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntakeStage {
    /// Age, gender, height, weight.
    PersonalInfo,
    /// Activity level, goal, dietary preference; submission happens here.
    Preferences,
}

/// Linear wizard over a single form.
///
/// Moving forward is not gated on validation; everything is checked on
/// submit from the last stage.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeWizard {
    stage: IntakeStage,
    form: ProfileIntakeForm,
}

impl IntakeWizard {
    pub fn new(form: ProfileIntakeForm) -> Self {
        Self {
            stage: IntakeStage::PersonalInfo,
            form,
        }
    }

    pub fn stage(&self) -> IntakeStage {
        self.stage
    }

    pub fn form(&self) -> &ProfileIntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileIntakeForm {
        &mut self.form
    }

    /// `PersonalInfo -> Preferences`; no-op on the last stage.
    pub fn advance(&mut self) -> IntakeStage {
        if self.stage == IntakeStage::PersonalInfo {
            self.stage = IntakeStage::Preferences;
        }
        self.stage
    }

    /// `Preferences -> PersonalInfo`; no-op on the first stage.
    pub fn back(&mut self) -> IntakeStage {
        if self.stage == IntakeStage::Preferences {
            self.stage = IntakeStage::PersonalInfo;
        }
        self.stage
    }

    pub fn can_submit(&self) -> bool {
        self.stage == IntakeStage::Preferences
    }

    pub fn validate(&self) -> Result<DietProfile, IntakeFormError> {
        self.form.validate()
    }
}
