//! Program Catalog
//!
//! The compiled-in 8-week hypertrophy program: 31 exercises across a 5-day
//! split. Every exercise carries its progression parameters and the fixed
//! list of substitutes a user may swap it for.
//!
//! The catalog is built once on first access and never mutated afterwards.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

static PROGRAM: LazyLock<Catalog> = LazyLock::new(build_program);

/// The shared, immutable program catalog
pub fn program() -> &'static Catalog {
    &PROGRAM
}

// ---------------------------------------------------------------------------
/// Progression Parameters: the numbers that drive weekly targets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressionParams {
    /// Week 1 load in lbs (0 for bodyweight movements)
    pub start_weight: f64,
    /// Load added at every phase boundary
    pub increment: f64,
    pub target_reps: u32,
    pub rest_seconds: u32,
    /// Compound lifts get an extra set in the back half of the program
    pub is_compound: bool,
    /// Bodyweight movements never progress in load
    pub is_bodyweight: bool,
}

// ---------------------------------------------------------------------------
/// Exercise and Substitute Definitions
// ---------------------------------------------------------------------------

/// Alternative movement offered for a catalog exercise. Has no progression
/// numbers of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstituteDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle: &'static str,
    pub equipment: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle: &'static str,
    pub equipment: &'static str,
    #[serde(flatten)]
    pub progression: ProgressionParams,
    pub substitutes: Vec<SubstituteDefinition>,
}

impl ExerciseDefinition {
    /// Find one of this exercise's own substitutes by id
    pub fn substitute(&self, substitute_id: &str) -> Option<&SubstituteDefinition> {
        self.substitutes.iter().find(|s| s.id == substitute_id)
    }
}

/// One day of the split, exercises listed in training order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingDay {
    pub day_number: u8,
    pub name: &'static str,
    pub exercises: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
/// Catalog: identity-keyed lookup plus declaration order
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Catalog {
    exercises: HashMap<&'static str, ExerciseDefinition>,
    order: Vec<&'static str>,
    days: Vec<TrainingDay>,
}

impl Catalog {
    fn new(definitions: Vec<ExerciseDefinition>, days: Vec<TrainingDay>) -> Self {
        let order = definitions.iter().map(|e| e.id).collect();
        let exercises = definitions.into_iter().map(|e| (e.id, e)).collect();
        Self {
            exercises,
            order,
            days,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.exercises.get(id)
    }

    /// All exercises in declaration order (for selectors)
    pub fn all_exercises(&self) -> impl Iterator<Item = &ExerciseDefinition> + '_ {
        self.order.iter().filter_map(|id| self.exercises.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn days(&self) -> &[TrainingDay] {
        &self.days
    }

    /// Look up a training day by its 1-based number
    pub fn day(&self, day_number: u8) -> Option<&TrainingDay> {
        self.days.iter().find(|d| d.day_number == day_number)
    }
}

// ---------------------------------------------------------------------------
// Program data
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &'static str,
    name: &'static str,
    muscle: &'static str,
    equipment: &'static str,
    start_weight: f64,
    increment: f64,
    target_reps: u32,
    rest_seconds: u32,
    is_compound: bool,
    substitutes: Vec<SubstituteDefinition>,
) -> ExerciseDefinition {
    ExerciseDefinition {
        id,
        name,
        muscle,
        equipment,
        progression: ProgressionParams {
            start_weight,
            increment,
            target_reps,
            rest_seconds,
            is_compound,
            is_bodyweight: false,
        },
        substitutes,
    }
}

fn bodyweight(
    id: &'static str,
    name: &'static str,
    muscle: &'static str,
    target_reps: u32,
    rest_seconds: u32,
    substitutes: Vec<SubstituteDefinition>,
) -> ExerciseDefinition {
    ExerciseDefinition {
        id,
        name,
        muscle,
        equipment: "Bodyweight",
        progression: ProgressionParams {
            start_weight: 0.0,
            increment: 0.0,
            target_reps,
            rest_seconds,
            is_compound: true,
            is_bodyweight: true,
        },
        substitutes,
    }
}

fn sub(
    id: &'static str,
    name: &'static str,
    muscle: &'static str,
    equipment: &'static str,
    description: &'static str,
) -> SubstituteDefinition {
    SubstituteDefinition {
        id,
        name,
        muscle,
        equipment,
        description,
    }
}

fn build_program() -> Catalog {
    let exercises = vec![
        // Day 1: Chest & Back (Horizontal)
        exercise("flat-db-bench", "Flat DB Bench", "Chest", "Dumbbells", 75.0, 5.0, 10, 90, true, vec![
            sub("barbell-bench", "Barbell Bench Press", "Chest", "Barbell", "Retract the shoulder blades, touch mid-chest, drive through the floor."),
            sub("machine-chest-press", "Machine Chest Press", "Chest", "Machine", "Handles at mid-chest height, press without locking out."),
            sub("db-floor-press", "DB Floor Press", "Chest", "Dumbbells", "Let the triceps rest on the floor for a beat each rep."),
        ]),
        exercise("t-bar-row", "T-Bar Row", "Back", "Barbell", 90.0, 5.0, 10, 90, true, vec![
            sub("chest-supported-row", "Chest-Supported DB Row", "Back", "Dumbbells", "Chest on a 30 degree bench, drive elbows toward the hips."),
            sub("seated-cable-row", "Seated Cable Row", "Back", "Cable", "Neutral grip, squeeze the shoulder blades at the finish."),
            sub("pendlay-row", "Pendlay Row", "Back", "Barbell", "Torso near parallel, bar resets on the floor every rep."),
        ]),
        exercise("incline-cable-fly", "Incline Cable Fly", "Upper Chest", "Cable", 25.0, 2.5, 12, 60, false, vec![
            sub("incline-db-fly", "Incline DB Fly", "Upper Chest", "Dumbbells", "Soft elbows, get a deep stretch at the bottom."),
            sub("low-to-high-cable-fly", "Low-to-High Cable Fly", "Upper Chest", "Cable", "Sweep the handles up to eye level."),
        ]),
        exercise("single-arm-db-row", "Single-Arm DB Row", "Back", "Dumbbell", 70.0, 5.0, 10, 90, true, vec![
            sub("single-arm-cable-row", "Single-Arm Cable Row", "Back", "Cable", "Let the shoulder reach forward, then pull to the hip."),
            sub("machine-high-row", "Machine High Row", "Back", "Machine", "Drive elbows down and back, pause at the bottom."),
        ]),
        exercise("machine-pec-fly", "Machine Pec Fly", "Chest", "Machine", 115.0, 5.0, 12, 60, false, vec![
            sub("cable-fly", "Cable Fly", "Chest", "Cable", "Pulleys at shoulder height, hug a big tree."),
            sub("flat-db-fly", "Flat DB Fly", "Chest", "Dumbbells", "Stop just short of the elbows locking at the top."),
        ]),
        exercise("face-pull", "Face Pull", "Rear Delts", "Cable", 40.0, 2.5, 15, 45, false, vec![
            sub("reverse-pec-deck", "Reverse Pec Deck", "Rear Delts", "Machine", "Lead with the pinkies, keep the chest on the pad."),
            sub("band-pull-apart", "Band Pull-Apart", "Rear Delts", "Band", "Arms straight, pull the band to the sternum."),
            sub("prone-y-raise", "Prone Y-Raise", "Rear Delts", "Dumbbells", "Chest on an incline bench, thumbs up, raise into a Y."),
        ]),
        // Day 2: Quads & Calves
        exercise("leg-press", "Leg Press", "Quads", "Machine", 360.0, 20.0, 10, 120, true, vec![
            sub("hack-squat", "Hack Squat", "Quads", "Machine", "Feet low on the platform, sink deep under control."),
            sub("back-squat", "Barbell Back Squat", "Quads", "Barbell", "High bar, brace hard, knees track over toes."),
            sub("belt-squat", "Belt Squat", "Quads", "Machine", "Stay upright and sit straight down between the feet."),
        ]),
        exercise("bulgarian-split-squat", "Bulgarian Split Squat", "Quads", "Dumbbells", 40.0, 5.0, 10, 90, true, vec![
            sub("db-walking-lunge", "DB Walking Lunge", "Quads", "Dumbbells", "Short steps, front knee travels forward."),
            sub("reverse-lunge", "Reverse Lunge", "Quads", "Dumbbells", "Step back softly, push through the front foot."),
            sub("smith-split-squat", "Smith Machine Split Squat", "Quads", "Smith Machine", "Front foot slightly forward of the bar."),
        ]),
        exercise("leg-extension", "Leg Extension", "Quads", "Machine", 100.0, 5.0, 12, 60, false, vec![
            sub("sissy-squat", "Sissy Squat", "Quads", "Bodyweight", "Hold a support, lean back as the knees travel forward."),
            sub("spanish-squat", "Banded Spanish Squat", "Quads", "Band", "Band behind the knees, sit back against the tension."),
        ]),
        exercise("goblet-squat", "Goblet Squat", "Quads", "Dumbbell", 50.0, 5.0, 12, 75, true, vec![
            sub("front-squat", "Front Squat", "Quads", "Barbell", "Elbows high, stay tall through the whole rep."),
            sub("heel-elevated-db-squat", "Heel-Elevated DB Squat", "Quads", "Dumbbells", "Heels on a plate, knees far forward."),
            sub("pendulum-squat", "Pendulum Squat", "Quads", "Machine", "Full depth, no pause at the top."),
        ]),
        exercise("seated-calf-raise", "Seated Calf Raise", "Calves", "Machine", 90.0, 5.0, 15, 45, false, vec![
            sub("standing-calf-raise", "Standing Calf Raise", "Calves", "Machine", "Two second pause in the stretched position."),
            sub("leg-press-calf-raise", "Leg Press Calf Raise", "Calves", "Machine", "Balls of the feet on the platform edge, knees soft."),
            sub("single-leg-calf-raise", "Single-Leg DB Calf Raise", "Calves", "Dumbbell", "Stand on a step, full range every rep."),
        ]),
        exercise("pallof-press", "Pallof Press", "Core", "Cable", 30.0, 2.5, 12, 45, false, vec![
            sub("dead-bug", "Dead Bug", "Core", "Bodyweight", "Low back glued to the floor, exhale as the limbs extend."),
            sub("suitcase-carry", "Suitcase Carry", "Core", "Dumbbell", "Heavy bell in one hand, walk without leaning."),
        ]),
        // Day 3: Shoulders & Arms
        exercise("seated-db-ohp", "Seated DB OHP", "Shoulders", "Dumbbells", 50.0, 5.0, 10, 90, true, vec![
            sub("machine-shoulder-press", "Machine Shoulder Press", "Shoulders", "Machine", "Handles start at ear height, press to just short of lockout."),
            sub("landmine-press", "Landmine Press", "Shoulders", "Barbell", "Half kneeling, press up and slightly forward."),
            sub("arnold-press", "Arnold Press", "Shoulders", "Dumbbells", "Rotate palms out as the dumbbells rise."),
        ]),
        exercise("cable-lateral-raise", "Cable Lateral Raise", "Side Delts", "Cable", 15.0, 2.5, 15, 45, false, vec![
            sub("db-lateral-raise", "DB Lateral Raise", "Side Delts", "Dumbbells", "Slight lean forward, lead with the elbows."),
            sub("machine-lateral-raise", "Machine Lateral Raise", "Side Delts", "Machine", "Pads on the forearms, raise to shoulder height."),
        ]),
        exercise("incline-db-curl", "Incline DB Curl", "Biceps", "Dumbbells", 30.0, 5.0, 12, 60, false, vec![
            sub("preacher-curl", "EZ-Bar Preacher Curl", "Biceps", "EZ-Bar", "Armpits tight to the pad, lower for a slow three count."),
            sub("hammer-curl", "Hammer Curl", "Biceps", "Dumbbells", "Neutral grip, no swinging."),
        ]),
        exercise("dip-machine", "Dip Machine", "Triceps", "Machine", 180.0, 10.0, 10, 90, true, vec![
            sub("parallel-bar-dip", "Parallel Bar Dip", "Triceps", "Bodyweight", "Stay upright to keep the load on the triceps."),
            sub("close-grip-bench", "Close-Grip Bench Press", "Triceps", "Barbell", "Hands shoulder width, elbows tucked."),
        ]),
        exercise("bayesian-cable-curl", "Bayesian Cable Curl", "Biceps", "Cable", 20.0, 2.5, 12, 60, false, vec![
            sub("spider-curl", "Spider Curl", "Biceps", "Dumbbells", "Chest on an incline bench, arms hanging straight down."),
            sub("cable-curl", "Cable Curl", "Biceps", "Cable", "Elbows pinned, squeeze hard at the top."),
        ]),
        exercise("ez-bar-skull-crusher", "EZ-Bar Skull Crusher", "Triceps", "EZ-Bar", 55.0, 5.0, 12, 60, false, vec![
            sub("overhead-cable-extension", "Overhead Cable Extension", "Triceps", "Cable", "Face away from the stack, reach deep behind the head."),
            sub("db-skull-crusher", "DB Skull Crusher", "Triceps", "Dumbbells", "Lower beside the head, elbows still."),
        ]),
        exercise("rear-delt-cable-fly", "Rear Delt Cable Fly", "Rear Delts", "Cable", 15.0, 2.5, 15, 45, false, vec![
            sub("bent-over-rear-delt-fly", "Bent-Over Rear Delt Fly", "Rear Delts", "Dumbbells", "Hinge to parallel, sweep the weights wide."),
            sub("rear-delt-machine-fly", "Rear Delt Machine Fly", "Rear Delts", "Machine", "Neutral handles, stop when the arms are in line with the body."),
        ]),
        // Day 4: Chest & Back (Angles)
        exercise("low-incline-db-press", "Low-Incline DB Press", "Upper Chest", "Dumbbells", 60.0, 5.0, 10, 90, true, vec![
            sub("incline-barbell-press", "Incline Barbell Press", "Upper Chest", "Barbell", "Bench at 15-30 degrees, touch just under the collarbone."),
            sub("incline-machine-press", "Incline Machine Press", "Upper Chest", "Machine", "Seat low so the handles line up with the upper chest."),
            sub("incline-smith-press", "Incline Smith Press", "Upper Chest", "Smith Machine", "Slow eccentric, elbows at 45 degrees."),
        ]),
        exercise("wide-grip-pulldown", "Wide-Grip Pulldown", "Back", "Cable", 120.0, 5.0, 10, 90, true, vec![
            sub("pull-up", "Pull-Up", "Back", "Bodyweight", "Dead hang start, chest to the bar."),
            sub("neutral-grip-pulldown", "Neutral-Grip Pulldown", "Back", "Cable", "Pull the handle to the upper chest, lean back slightly."),
            sub("single-arm-pulldown", "Single-Arm Pulldown", "Back", "Cable", "Kneel sideways, drive the elbow to the hip."),
        ]),
        exercise("cable-crossover", "Cable Crossover", "Chest", "Cable", 20.0, 2.5, 12, 60, false, vec![
            sub("pec-deck", "Pec Deck", "Chest", "Machine", "Elbows slightly bent, squeeze for a beat in the middle."),
            sub("svend-press", "Svend Press", "Chest", "Plate", "Crush the plate between the palms and press out."),
        ]),
        exercise("meadows-row", "Meadows Row", "Back", "Barbell", 50.0, 5.0, 10, 90, true, vec![
            sub("kroc-row", "Kroc Row", "Back", "Dumbbell", "Heavy single-arm row, controlled body english allowed."),
            sub("seal-row", "Seal Row", "Back", "Barbell", "Lie on a high bench, row to the bottom of the bench."),
        ]),
        bodyweight("push-up", "Push-Up (Banded)", "Chest", 15, 60, vec![
            sub("deficit-push-up", "Deficit Push-Up", "Chest", "Bodyweight", "Hands on plates, chest below hand level."),
            sub("ring-push-up", "Ring Push-Up", "Chest", "Rings", "Turn the rings out at the top."),
        ]),
        exercise("straight-arm-pulldown", "Straight-Arm Pulldown", "Back", "Cable", 50.0, 5.0, 12, 60, false, vec![
            sub("db-pullover", "DB Pullover", "Back", "Dumbbell", "Across a bench, hips low, reach back for the stretch."),
            sub("machine-pullover", "Machine Pullover", "Back", "Machine", "Elbows on the pads, sweep down to the thighs."),
        ]),
        // Day 5: Hams, Glutes & Core
        exercise("barbell-glute-bridge", "Barbell Glute Bridge", "Glutes", "Barbell", 225.0, 10.0, 10, 120, true, vec![
            sub("hip-thrust", "Barbell Hip Thrust", "Glutes", "Barbell", "Upper back on a bench, chin tucked, lock out with the glutes."),
            sub("machine-hip-thrust", "Machine Hip Thrust", "Glutes", "Machine", "Pause one second at full extension."),
            sub("single-leg-hip-thrust", "Single-Leg Hip Thrust", "Glutes", "Bodyweight", "Keep the pelvis level through the rep."),
        ]),
        exercise("lying-leg-curl", "Lying Leg Curl", "Hamstrings", "Machine", 90.0, 5.0, 12, 60, false, vec![
            sub("seated-leg-curl", "Seated Leg Curl", "Hamstrings", "Machine", "Lean forward to lengthen the hamstrings."),
            sub("stability-ball-curl", "Stability Ball Leg Curl", "Hamstrings", "Stability Ball", "Hips high, roll the ball in with the heels."),
        ]),
        exercise("db-step-up", "DB Step-Up", "Glutes", "Dumbbells", 35.0, 5.0, 10, 90, true, vec![
            sub("deficit-reverse-lunge", "Deficit Reverse Lunge", "Glutes", "Dumbbells", "Front foot on a plate, step long, lean slightly forward."),
            sub("smith-step-up", "Smith Machine Step-Up", "Glutes", "Smith Machine", "Knee-height box, drive through the working heel."),
        ]),
        bodyweight("nordic-ham-curl", "Nordic Ham Curl", "Hamstrings", 10, 90, vec![
            sub("glute-ham-raise", "Glute-Ham Raise", "Hamstrings", "Machine", "Knees behind the pad, curl up with the hamstrings."),
            sub("slider-leg-curl", "Slider Leg Curl", "Hamstrings", "Bodyweight", "Bridge up, slide the heels out slowly."),
            sub("romanian-deadlift", "Romanian Deadlift", "Hamstrings", "Barbell", "Soft knees, push the hips back until the hamstrings stop you."),
        ]),
        exercise("cable-pull-through", "Cable Pull-Through", "Glutes", "Cable", 60.0, 5.0, 12, 60, false, vec![
            sub("kettlebell-swing", "Kettlebell Swing", "Glutes", "Kettlebell", "Hike the bell back, snap the hips."),
            sub("back-extension", "45 Degree Back Extension", "Glutes", "Bodyweight", "Round the upper back slightly, squeeze the glutes up."),
        ]),
        exercise("cable-crunch", "Cable Crunch", "Core", "Cable", 70.0, 5.0, 15, 45, false, vec![
            sub("hanging-leg-raise", "Hanging Leg Raise", "Core", "Bodyweight", "Curl the pelvis up, no swinging."),
            sub("ab-wheel", "Ab Wheel Rollout", "Core", "Ab Wheel", "Tuck the pelvis and roll out only as far as you can keep it."),
            sub("decline-crunch", "Decline Crunch", "Core", "Bench", "Exhale fully at the top."),
        ]),
    ];

    let days = vec![
        TrainingDay {
            day_number: 1,
            name: "Chest & Back (Horizontal)",
            exercises: vec![
                "flat-db-bench",
                "t-bar-row",
                "incline-cable-fly",
                "single-arm-db-row",
                "machine-pec-fly",
                "face-pull",
            ],
        },
        TrainingDay {
            day_number: 2,
            name: "Quads & Calves",
            exercises: vec![
                "leg-press",
                "bulgarian-split-squat",
                "leg-extension",
                "goblet-squat",
                "seated-calf-raise",
                "pallof-press",
            ],
        },
        TrainingDay {
            day_number: 3,
            name: "Shoulders & Arms",
            exercises: vec![
                "seated-db-ohp",
                "cable-lateral-raise",
                "incline-db-curl",
                "dip-machine",
                "bayesian-cable-curl",
                "ez-bar-skull-crusher",
                "rear-delt-cable-fly",
            ],
        },
        TrainingDay {
            day_number: 4,
            name: "Chest & Back (Angles)",
            exercises: vec![
                "low-incline-db-press",
                "wide-grip-pulldown",
                "cable-crossover",
                "meadows-row",
                "push-up",
                "straight-arm-pulldown",
            ],
        },
        TrainingDay {
            day_number: 5,
            name: "Hams, Glutes & Core",
            exercises: vec![
                "barbell-glute-bridge",
                "lying-leg-curl",
                "db-step-up",
                "nordic-ham-curl",
                "cable-pull-through",
                "cable-crunch",
            ],
        },
    ];

    Catalog::new(exercises, days)
}
