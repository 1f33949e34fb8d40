// ABOUTME: Bundled sample-client roster for demonstration seeding
// ABOUTME: Ten clients spanning every goal, with a couple of pre-dated history entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! Sample roster used by the `seed` command. Seeding replaces the whole
//! store; the CLI guards that with a confirmation when data already exists.

use crate::models::{ClientRecord, Goal, IdGenerator};

/// One sample-roster row
struct SampleRow {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    goal: Goal,
    start_date: &'static str,
    age: &'static str,
    gender: &'static str,
    history: &'static [&'static str],
}

const SAMPLE_ROWS: [SampleRow; 10] = [
    SampleRow {
        name: "Mike Morgan",
        email: "mickymouse@test.com",
        phone: "8888-555-77-01",
        goal: Goal::WeightLoss,
        start_date: "2025-02-15",
        age: "29",
        gender: "Male",
        history: &["2/15/2025 - Existing client added (sample)"],
    },
    SampleRow {
        name: "Tyson Oplak",
        email: "tys.op@test.com",
        phone: "8888-555-77-02",
        goal: Goal::MuscleGain,
        start_date: "2025-03-10",
        age: "34",
        gender: "Male",
        history: &["3/10/2025 - Sample entry"],
    },
    SampleRow {
        name: "Mordecai Bird",
        email: "morebird@test.com",
        phone: "8888-555-77-03",
        goal: Goal::Endurance,
        start_date: "2025-01-22",
        age: "26",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "Rigby Racoon",
        email: "rigrac@test.com",
        phone: "8888-555-77-04",
        goal: Goal::GeneralFitness,
        start_date: "2025-05-02",
        age: "22",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "Benson Boss",
        email: "bboss@test.com",
        phone: "8888-555-77-05",
        goal: Goal::WeightLoss,
        start_date: "2024-12-01",
        age: "41",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "Skips Skips",
        email: "yetiman@test.com",
        phone: "8888-555-77-06",
        goal: Goal::MuscleGain,
        start_date: "2025-02-05",
        age: "40",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "Pops Candy",
        email: "popsweets@test.com",
        phone: "8888-555-77-07",
        goal: Goal::Flexibility,
        start_date: "2025-03-30",
        age: "37",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "William Afton",
        email: "purple.guy@test.com",
        phone: "8888-555-77-08",
        goal: Goal::Endurance,
        start_date: "2025-04-14",
        age: "50",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "Mohamed Ali",
        email: "mhmd.ali@test.com",
        phone: "8888-555-77-09",
        goal: Goal::GeneralFitness,
        start_date: "2025-01-08",
        age: "32",
        gender: "Male",
        history: &[],
    },
    SampleRow {
        name: "Eddie Brock",
        email: "venom@test.com",
        phone: "8888-555-77-10",
        goal: Goal::WeightLoss,
        start_date: "2025-02-25",
        age: "34",
        gender: "Male",
        history: &[],
    },
];

/// Build the sample roster with freshly generated ids.
pub fn sample_clients(ids: &dyn IdGenerator) -> Vec<ClientRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|row| ClientRecord {
            id: ids.generate(),
            name: row.name.to_owned(),
            age: row.age.to_owned(),
            gender: row.gender.to_owned(),
            email: row.email.to_owned(),
            phone: row.phone.to_owned(),
            goal: row.goal,
            start_date: row.start_date.to_owned(),
            history: row.history.iter().map(|&h| h.to_owned()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequentialIdGenerator;
    use crate::validation::validate;
    use crate::ClientForm;
    use std::collections::HashSet;

    #[test]
    fn test_sample_roster_has_ten_unique_ids() {
        let roster = sample_clients(&SequentialIdGenerator::default());
        assert_eq!(roster.len(), 10);
        let ids: HashSet<&str> = roster.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_sample_roster_passes_validation() {
        for client in sample_clients(&SequentialIdGenerator::default()) {
            let form = ClientForm {
                name: client.name,
                age: client.age,
                gender: client.gender,
                email: client.email,
                phone: client.phone,
                goal: client.goal.as_str().to_owned(),
                start_date: client.start_date,
                history_text: String::new(),
            };
            assert!(validate(&form).is_valid());
        }
    }
}
