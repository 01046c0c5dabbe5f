use crate::MIN_TIME;

/*
Linear ADSR envelope generator.

    Level
      1.0 ┐     ╱╲
          │    ╱  ╲___________
      S   │   ╱               ╲
          │  ╱                 ╲
      0.0 └─╱───────────────────╲──→ Time
          Attack Decay  Sustain  Release

The gate signal drives a five-stage state machine:

    Idle --gate(true)--> Attack --level>=1--> Decay --level<=S--> Sustain
    any active stage --gate(false)--> Release --level<=0--> Idle

Rates are level-deltas per sample, derived fresh each sample from the
seconds parameters (handles sample-rate changes with no cache
invalidation). A stage time at or below MIN_TIME completes in a single
sample instead of dividing by zero.

Retrigger policy: gate(true) while the envelope is already active restarts
Attack from the CURRENT level, not from zero. The level ramp stays
continuous, so a retrigger mid-decay never produces a click.
*/

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,    // Gate low, envelope inactive, level = 0
    Attack,  // Gate went high, ramping up to 1.0
    Decay,   // Reached peak, ramping down to sustain level
    Sustain, // Holding at sustain level while gate is high
    Release, // Gate went low, ramping down to 0
}

pub struct Envelope {
    // Shape parameters, in seconds / level
    attack_time: f32,
    decay_time: f32,
    sustain_level: f32,
    release_time: f32,

    sample_rate: f32,

    // Runtime state
    stage: EnvelopeStage,
    level: f32,
}

impl Envelope {
    pub fn adsr(sample_rate: f32, attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack_time: attack.max(0.0),
            decay_time: decay.max(0.0),
            sustain_level: sustain.clamp(0.0, 1.0),
            release_time: release.max(0.0),
            sample_rate,
            stage: EnvelopeStage::Idle,
            level: 0.0,
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    pub fn set_attack(&mut self, seconds: f32) {
        self.attack_time = seconds.max(0.0);
    }

    pub fn set_decay(&mut self, seconds: f32) {
        self.decay_time = seconds.max(0.0);
    }

    pub fn set_sustain(&mut self, level: f32) {
        self.sustain_level = level.clamp(0.0, 1.0);
    }

    pub fn set_release(&mut self, seconds: f32) {
        self.release_time = seconds.max(0.0);
    }

    /// Open (true) or close (false) the gate.
    ///
    /// Opening from Idle starts Attack at zero; opening while active
    /// restarts Attack from the current level. Closing moves any active
    /// stage into Release.
    pub fn gate(&mut self, open: bool) {
        if open {
            self.stage = EnvelopeStage::Attack;
        } else if self.stage != EnvelopeStage::Idle {
            self.stage = EnvelopeStage::Release;
        }
    }

    /// Per-sample level delta that crosses `range` in `seconds`.
    #[inline]
    fn rate(&self, range: f32, seconds: f32) -> f32 {
        if seconds <= MIN_TIME {
            // Instantaneous stage: the whole range in one sample
            range
        } else {
            range / (seconds * self.sample_rate)
        }
    }

    /// Advance one sample and return the new level.
    #[inline]
    pub fn process(&mut self) -> f32 {
        match self.stage {
            EnvelopeStage::Idle => {
                self.level = 0.0;
            }

            EnvelopeStage::Attack => {
                self.level += self.rate(1.0, self.attack_time);
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = EnvelopeStage::Decay;
                }
            }

            EnvelopeStage::Decay => {
                self.level -= self.rate(1.0 - self.sustain_level, self.decay_time);
                if self.level <= self.sustain_level {
                    self.level = self.sustain_level;
                    self.stage = EnvelopeStage::Sustain;
                }
            }

            EnvelopeStage::Sustain => {
                self.level = self.sustain_level;
            }

            EnvelopeStage::Release => {
                self.level -= self.rate(1.0, self.release_time);
                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level
    }

    /// Returns true if the envelope is producing output (not idle).
    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeStage::Idle
    }

    /// Reset to idle state, level zero.
    pub fn reset(&mut self) {
        self.stage = EnvelopeStage::Idle;
        self.level = 0.0;
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }
}
