use std::fmt;

/// What a failed step does to the rest of the chain.
///
/// 步骤失败策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Stop and report the failure.
    Abort,
    /// Log it and carry on with the next step.
    Ignore,
}

/// The three requests of a submission, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    SubmitProfile,
    TrainModel,
    Predict,
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakeStep::SubmitProfile => "profile submission",
            IntakeStep::TrainModel => "model training",
            IntakeStep::Predict => "prediction",
        };
        f.write_str(name)
    }
}

/// Failure handling for the steps that precede the prediction.
///
/// The prediction itself has no policy: without it there is nothing to show,
/// so its failure always ends the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub profile: StepPolicy,
    pub training: StepPolicy,
}

impl Default for SubmissionPolicy {
    /// A stored profile is required; a failed retrain is tolerated because
    /// the previous model can still predict.
    fn default() -> Self {
        Self {
            profile: StepPolicy::Abort,
            training: StepPolicy::Ignore,
        }
    }
}

impl SubmissionPolicy {
    pub fn for_step(&self, step: IntakeStep) -> StepPolicy {
        match step {
            IntakeStep::SubmitProfile => self.profile,
            IntakeStep::TrainModel => self.training,
            IntakeStep::Predict => StepPolicy::Abort,
        }
    }
}
