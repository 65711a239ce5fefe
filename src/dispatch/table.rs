//! Per-template bindings for the slide library.
//!
//! Each entry lists, in application order, the rules that move content-plan
//! slot values onto the named shapes of one library slide. Shape names come
//! straight from the library deck and follow no convention, so every binding
//! is spelled out literally, including the few that read an unexpected slot
//! or write the same shape twice.

use super::rules::Piece::{Lit, Val};
use super::rules::Rule::{Compose, FanOut, Put, Title};
use super::rules::Target::{Cell, Grouped, Shape};
use super::rules::{Clause, Rule, Template};

/// Rules for the opening slide, filled with the presentation title.
pub static TITLE_RULES: &[Rule] = &[
    Title(Shape("Title 1")),
];

/// Every library slide a content plan may reference, ordered by id.
pub static TEMPLATES: &[Template] = &[
    Template {
        id: 4,
        rules: &[
            Title(Shape("Titre 1")),
            Put("source", Shape("ZoneTexte 8")),
            Put("description", Shape("ZoneTexte 19")),
        ],
    },
    Template {
        id: 5,
        rules: &[
            Title(Shape("Titre 1")),
            Put("source", Shape("ZoneTexte 8")),
            Put("description", Shape("ZoneTexte 19")),
        ],
    },
    Template {
        id: 6,
        rules: &[
            Title(Shape("Titre 1")),
            Put("source", Shape("source")),
            Put("description", Shape("Rectangle 26")),
        ],
    },
    Template {
        id: 7,
        rules: &[
            Title(Shape("Titre 1")),
        ],
    },
    Template {
        id: 8,
        rules: &[
            Title(Shape("Titre 1")),
            Put("summary_title_1", Shape("ZoneTexte 4")),
            Put("summary_title_2", Shape("ZoneTexte 6")),
            Put("zonetexte_8", Shape("ZoneTexte 8")),
            // "ZoneTexte 6" also receives summary_title_2; the last present value wins.
            Put("source_1", Shape("ZoneTexte 6")),
            Put("source_2", Shape("ZoneTexte 10")),
        ],
    },
    Template {
        id: 9,
        rules: &[
            Title(Shape("Titre 1")),
            Put("description", Shape("Content Placeholder 3")),
            Put("source", Shape("ZoneTexte 10")),
        ],
    },
    Template {
        id: 10,
        rules: &[
            Title(Shape("Title 1")),
            Put("description", Shape("Content Placeholder 3")),
            Put("graph_title", Shape("TextBox 2")),
        ],
    },
    Template {
        id: 11,
        rules: &[
            Title(Shape("Titre 1")),
            Put("cause_1", Shape("Rectangle 7")),
            Put("conclusion_1", Shape("Rectangle 8")),
            Put("consequence_1", Shape("ZoneTexte 32")),
            Put("cause_2", Shape("Rectangle 13")),
            Put("conclusion_2", Shape("Rectangle 10")),
            Put("consequence_2", Shape("ZoneTexte 32")),
            Put("cause_3", Shape("Rectangle 14")),
            Put("conclusion_3", Shape("Rectangle 12")),
            // "ZoneTexte 32" also receives consequence_1 and consequence_2; the last present value wins.
            Put("consequence_3", Shape("ZoneTexte 32")),
            Put("benefit", Shape("Ellipse 17")),
        ],
    },
    Template {
        id: 12,
        rules: &[
            Title(Shape("Titre 1")),
            Put("criteria_1", Cell("Table 7", 1, 1)),
            Put("description_1", Cell("Table 7", 1, 2)),
            Put("criteria_2", Cell("Table 7", 2, 1)),
            Put("description_2", Cell("Table 7", 2, 2)),
            Put("criteria_3", Cell("Table 7", 3, 1)),
            Put("description_3", Cell("Table 7", 3, 2)),
            Put("criteria_4", Cell("Table 7", 4, 1)),
            Put("description_4", Cell("Table 7", 4, 2)),
            Put("key_consequences", Shape("Google Shape;1738;p230")),
        ],
    },
    Template {
        id: 13,
        rules: &[
            Title(Shape("Titre 1")),
            Put("description", Shape("ZoneTexte 18")),
            Put("key_messages", Shape("Google Shape;1738;p230")),
        ],
    },
    Template {
        id: 15,
        rules: &[
            Title(Shape("Titre 7")),
            Put("company_description", Shape("Rectangle 5")),
            Put("our_role", Shape("Rectangle 15")),
            Put("results", Shape("Rectangle 12")),
            Put("quote", Shape("Rectangle 18")),
        ],
    },
    Template {
        id: 16,
        rules: &[
            Title(Shape("Title 3")),
            Put("reference_1", Shape("Rectangle 29")),
            Put("info_1", Shape("Rectangle 28")),
            Put("reference_2", Shape("Rectangle 32")),
            Put("info_2", Shape("Rectangle 31")),
        ],
    },
    Template {
        id: 17,
        rules: &[
            Title(Shape("Title 3")),
            Put("reference_1", Shape("Rectangle 29")),
            Put("info_1", Shape("Rectangle 28")),
            Put("reference_2", Shape("Rectangle 18")),
            Put("info_2", Shape("Rectangle 17")),
            Put("reference_3", Shape("Rectangle 24")),
            Put("info_3", Shape("Rectangle 23")),
        ],
    },
    Template {
        id: 18,
        rules: &[
            Title(Shape("Title 3")),
            Put("reference_1", Shape("Rectangle 42")),
            Put("info_1", Shape("Rectangle 43")),
            Put("reference_2", Shape("Rectangle 28")),
            Put("info_2", Shape("Rectangle 31")),
            Put("reference_3", Shape("Rectangle 34")),
            Put("info_3", Shape("Rectangle 35")),
            Put("reference_4", Shape("Rectangle 38")),
            Put("info_4", Shape("Rectangle 39")),
        ],
    },
    Template {
        id: 19,
        rules: &[
            Title(Shape("Title 1")),
            Put("roles_and_expertise", Shape("Rectangle 7")),
            Put("education_and_languages", Shape("Rectangle 4")),
            Put("selected_experience", Shape("Rectangle 8")),
        ],
    },
    Template {
        id: 20,
        rules: &[
            Title(Shape("Title 1")),
            Put("key_message", Shape("Content Placeholder 12")),
            Put("name_1", Shape("Rectangle 16")),
            Put("role_1", Shape("Rectangle 19")),
            Put("name_2", Shape("Rectangle 16-2")),
            Put("role_2", Shape("Rectangle 19-2")),
            Put("name_3", Shape("Rectangle 16-3")),
            Put("role_3", Shape("Rectangle 19-3")),
            Put("name_4", Shape("Rectangle 11")),
            Put("role_4", Shape("Rectangle 19-4")),
        ],
    },
    Template {
        id: 21,
        rules: &[
            Title(Shape("Title 1")),
            Put("key_message", Shape("Content Placeholder 12")),
            Put("name_1", Shape("Rectangle 16")),
            Put("role_1", Shape("Rectangle 19")),
            Put("name_2", Shape("Rectangle 16-2")),
            Put("role_2", Shape("Rectangle 19-2")),
            Put("name_3", Shape("Rectangle 16-3")),
            Put("role_3", Shape("Rectangle 19-3")),
            Put("name_4", Shape("Rectangle 11")),
            Put("role_4", Shape("Rectangle 19-4")),
            Put("name_5", Shape("Rectangle 16-5")),
            // reads "rol5_4" under the "role_5" guard.
            Compose(
                Shape("Rectangle 19-5"),
                &[
                    Clause { when: &["role_5"], parts: &[Val("rol5_4")] },
                ],
            ),
            Put("name_6", Shape("Rectangle 18")),
            Put("role_6", Shape("Rectangle 19-6")),
        ],
    },
    Template {
        id: 22,
        rules: &[
            Title(Shape("Titre 1")),
            Put("name_1", Shape("Rectangle 11")),
            Compose(
                Shape("Rectangle 19"),
                &[
                    Clause { when: &["title_1"], parts: &[Val("title_1")] },
                    Clause { when: &["role_1"], parts: &[Val("role_1")] },
                    Clause { when: &["expertise_1"], parts: &[Val("expertise_1")] },
                ],
            ),
            Put("name_2", Shape("Rectangle 30")),
            Compose(
                Shape("Rectangle 19-2"),
                &[
                    Clause { when: &["title_2"], parts: &[Val("title_2")] },
                    Clause { when: &["role_2"], parts: &[Val("role_2")] },
                    Clause { when: &["expertise_2"], parts: &[Val("expertise_2")] },
                ],
            ),
            Put("name_3", Shape("Rectangle 31")),
            Compose(
                Shape("Rectangle 19-3"),
                &[
                    Clause { when: &["title_3"], parts: &[Val("title_3")] },
                    Clause { when: &["role_3"], parts: &[Val("role_3")] },
                    Clause { when: &["expertise_3"], parts: &[Val("expertise_3")] },
                ],
            ),
            Put("name_4", Shape("Rectangle 32")),
            // reads "title_4" under the "title4" guard.
            Compose(
                Shape("Rectangle 20"),
                &[
                    Clause { when: &["title4"], parts: &[Val("title_4")] },
                    Clause { when: &["role_4"], parts: &[Val("role_4")] },
                    Clause { when: &["expertise_4"], parts: &[Val("expertise_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 24,
        rules: &[
            Title(Shape("Titre 1")),
            Put("objective_1", Cell("Table 26", 1, 2)),
            Put("objective_2", Cell("Table 26", 2, 2)),
            Put("objective_3", Cell("Table 26", 3, 2)),
            Put("objective_4", Cell("Table 26", 4, 2)),
        ],
    },
    Template {
        id: 25,
        rules: &[
            Title(Shape("Titre 1")),
            Put("principle_1", Cell("Espace réservé du contenu 4", 1, 1)),
            Put("context_1", Cell("Espace réservé du contenu 4", 1, 2)),
            Put("principle_2", Cell("Espace réservé du contenu 4", 2, 1)),
            Put("context_2", Cell("Espace réservé du contenu 4", 2, 2)),
            Put("principle_3", Cell("Espace réservé du contenu 4", 3, 1)),
            Put("context_3", Cell("Espace réservé du contenu 4", 3, 2)),
        ],
    },
    Template {
        id: 47,
        rules: &[
            Title(Shape("Titre 1")),
            Put("idea_1", Shape("Rectangle 31")),
            Put("idea_2", Shape("Rectangle 32")),
        ],
    },
    Template {
        id: 48,
        rules: &[
            Title(Shape("Titre 1")),
            Put("idea_1", Shape("Rectangle 31")),
            Put("idea_2", Shape("Rectangle 32")),
            Put("idea_3", Shape("Rectangle 33")),
        ],
    },
    Template {
        id: 49,
        rules: &[
            Title(Shape("Titre 1")),
            Put("idea_1", Shape("Rectangle 31")),
            Put("idea_2", Shape("Rectangle 32")),
            Put("idea_3", Shape("Rectangle 33")),
            Put("idea_4", Shape("Rectangle 14")),
        ],
    },
    Template {
        id: 50,
        rules: &[
            Title(Shape("Titre 1")),
            Put("idea_1", Shape("Forme libre : forme 6")),
            Put("idea_2", Shape("Forme libre : forme 9")),
            Put("idea_3", Shape("Forme libre : forme 11")),
        ],
    },
    Template {
        id: 51,
        rules: &[
            Title(Shape("Titre 1")),
            Put("idea_1", Shape("Forme libre : forme 6")),
            Put("idea_2", Shape("Forme libre : forme 9")),
            Put("idea_3", Shape("Forme libre : forme 11")),
            Put("idea_4", Shape("Forme libre : forme 18")),
        ],
    },
    Template {
        id: 52,
        rules: &[
            Title(Shape("Titre 1")),
            Put("idea_1", Shape("Forme libre : forme 33")),
            Put("idea_2", Shape("Forme libre : forme 34")),
            Put("idea_3", Shape("Forme libre : forme 35")),
            Put("idea_4", Shape("Forme libre : forme 42")),
            Put("idea_5", Shape("Forme libre : forme 36")),
        ],
    },
    Template {
        id: 53,
        rules: &[
            Title(Shape("Title 4")),
            Put("topic_1", Shape("ZoneTexte 22")),
            Put("detail_1", Shape("ZoneTexte 58")),
            Put("topic_2", Shape("ZoneTexte 51")),
            Put("detail_2", Shape("ZoneTexte 16")),
            Put("topic_3", Shape("ZoneTexte 52")),
            Put("detail_3", Shape("ZoneTexte 17")),
        ],
    },
    Template {
        id: 54,
        rules: &[
            Title(Shape("Title 4")),
            Put("topic_1", Shape("ZoneTexte 22")),
            Put("detail_1", Shape("ZoneTexte 58")),
            Put("topic_2", Shape("ZoneTexte 51")),
            Put("detail_2", Shape("ZoneTexte 18")),
            Put("topic_3", Shape("ZoneTexte 52")),
            Put("detail_3", Shape("ZoneTexte 23")),
            Put("topic_4", Shape("ZoneTexte 53")),
            Put("detail_4", Shape("ZoneTexte 24")),
        ],
    },
    Template {
        id: 55,
        rules: &[
            Title(Shape("Title 5")),
            Put("topic_1", Shape("Rectangle 28")),
            Put("detail_1", Shape("Rectangle 29")),
            Put("topic_2", Shape("Rectangle 30")),
            Put("detail_2", Shape("Rectangle 51")),
        ],
    },
    Template {
        id: 56,
        rules: &[
            Title(Shape("Title 5")),
            Put("topic_1", Shape("Rectangle 28")),
            Put("detail_1", Shape("Rectangle 29")),
            Put("topic_2", Shape("Rectangle 30")),
            Put("detail_2", Shape("Rectangle 51")),
            Put("topic_3", Shape("Rectangle 31")),
            Put("detail_3", Shape("Rectangle 53")),
        ],
    },
    Template {
        id: 57,
        rules: &[
            Title(Shape("Title 5")),
            Put("topic_1", Shape("Rectangle 28")),
            Put("detail_1", Shape("Rectangle 29")),
            Put("topic_2", Shape("Rectangle 54")),
            Put("detail_2", Shape("Rectangle 50")),
            Put("topic_3", Shape("Rectangle 59")),
            Put("detail_3", Shape("Rectangle 57")),
            Put("topic_4", Shape("Rectangle 64")),
            Put("detail_4", Shape("Rectangle 62")),
        ],
    },
    Template {
        id: 58,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 37"),
                &[
                    Clause { when: &["idea_1"], parts: &[Val("idea_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 39"),
                &[
                    Clause { when: &["idea_2"], parts: &[Val("idea_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 38"),
                &[
                    Clause { when: &["idea_3"], parts: &[Val("idea_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
        ],
    },
    Template {
        id: 59,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 12"),
                &[
                    Clause { when: &["idea_1"], parts: &[Val("idea_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 14"),
                &[
                    Clause { when: &["idea_2"], parts: &[Val("idea_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 13"),
                &[
                    Clause { when: &["idea_3"], parts: &[Val("idea_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 40"),
                &[
                    Clause { when: &["idea_4"], parts: &[Val("idea_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 60,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 37"),
                &[
                    Clause { when: &["idea_1"], parts: &[Val("idea_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 22"),
                &[
                    Clause { when: &["idea_2"], parts: &[Val("idea_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 26"),
                &[
                    Clause { when: &["idea_3"], parts: &[Val("idea_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 38"),
                &[
                    Clause { when: &["idea_4"], parts: &[Val("idea_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 23"),
                &[
                    Clause { when: &["idea_5"], parts: &[Val("idea_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
        ],
    },
    Template {
        id: 61,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 16"),
                &[
                    Clause { when: &["idea_1"], parts: &[Val("idea_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 18"),
                &[
                    Clause { when: &["idea_2"], parts: &[Val("idea_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 28"),
                &[
                    Clause { when: &["idea_3"], parts: &[Val("idea_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 17"),
                &[
                    Clause { when: &["idea_4"], parts: &[Val("idea_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 19"),
                &[
                    Clause { when: &["idea_5"], parts: &[Val("idea_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
            Compose(
                Shape("Rectangle 29"),
                &[
                    Clause { when: &["idea_6"], parts: &[Val("idea_6"), Lit("\n")] },
                    Clause { when: &["detail_6"], parts: &[Val("detail_6")] },
                ],
            ),
        ],
    },
    Template {
        id: 62,
        rules: &[
            Title(Shape("Title 1")),
            Put("idea_1", Shape("ZoneTexte 5")),
            Put("detail_1", Shape("ZoneTexte 6")),
            Put("idea_2", Shape("ZoneTexte 7")),
            Put("detail_2", Shape("ZoneTexte 9")),
        ],
    },
    Template {
        id: 63,
        rules: &[
            Title(Shape("Title 1")),
            Put("idea_1", Shape("ZoneTexte 5")),
            Put("detail_1", Shape("ZoneTexte 6")),
            Put("idea_2", Shape("ZoneTexte 7")),
            Put("detail_2", Shape("ZoneTexte 9")),
            Put("idea_3", Shape("ZoneTexte 15")),
            Put("detail_3", Shape("ZoneTexte 16")),
        ],
    },
    Template {
        id: 64,
        rules: &[
            Title(Shape("Title 1")),
            Put("criteria_1", Shape("TextBox 53")),
            Put("criteria_2", Shape("TextBox 54")),
            Put("quadrant_1", Shape("Freeform 5")),
            Put("description_1", Shape("TextBox 19")),
            Put("quadrant_2", Shape("Freeform 6")),
            Put("description_2", Shape("TextBox 24")),
            Put("quadrant_3", Shape("Freeform 8")),
            Put("description_3", Shape("TextBox 42")),
            Put("quadrant_4", Shape("Freeform 7")),
            Put("description_4", Shape("TextBox 46")),
        ],
    },
    Template {
        id: 65,
        rules: &[
            Title(Shape("Title 1")),
            Put("stake", Shape("Oval 40")),
            Put("quadrant_1", Cell("Tableau 46", 1, 1)),
            Put("description_1", Cell("Tableau 46", 2, 1)),
            Put("quadrant_2", Cell("Tableau 46-2", 1, 1)),
            Put("description_2", Cell("Tableau 46-2", 2, 1)),
            Put("quadrant_3", Cell("Tableau 46-3", 1, 1)),
            Put("description_3", Cell("Tableau 46-3", 2, 1)),
            Put("quadrant_4", Cell("Tableau 46-4", 1, 1)),
            Put("description_4", Cell("Tableau 46-4", 2, 1)),
        ],
    },
    Template {
        id: 66,
        rules: &[
            Title(Shape("Title 1")),
            Put("cause_1", Shape("Content Placeholder 4-1c")),
            Put("result_1", Shape("Content Placeholder 4-1r")),
            // reads "cause_1" under the "cause_2" guard.
            Compose(
                Shape("Content Placeholder 4-2c"),
                &[
                    Clause { when: &["cause_2"], parts: &[Val("cause_1")] },
                ],
            ),
            Put("result_2", Shape("Content Placeholder 4-2r")),
            Put("cause_3", Shape("Content Placeholder 4-3c")),
            Put("result_3", Shape("Content Placeholder 4-3r")),
            Put("cause_4", Shape("Content Placeholder 4-4c")),
            Put("result_4", Shape("Content Placeholder 4-4r")),
        ],
    },
    Template {
        id: 67,
        rules: &[
            Title(Shape("Title 1")),
            Put("cause_1", Shape("Content Placeholder 4-1c")),
            Put("result_1", Shape("Content Placeholder 4-1r")),
            // reads "cause_1" under the "cause_2" guard.
            Compose(
                Shape("Content Placeholder 4-2c"),
                &[
                    Clause { when: &["cause_2"], parts: &[Val("cause_1")] },
                ],
            ),
            Put("result_2", Shape("Content Placeholder 4-2r")),
            Put("cause_3", Shape("Content Placeholder 4-3c")),
            Put("result_3", Shape("Content Placeholder 4-3r")),
        ],
    },
    Template {
        id: 68,
        rules: &[
            Title(Shape("Title 1")),
            Put("cause_1", Shape("Content Placeholder 4-1c")),
            Put("result_1", Shape("Content Placeholder 4-1r")),
            // reads "cause_1" under the "cause_2" guard.
            Compose(
                Shape("Content Placeholder 4-2c"),
                &[
                    Clause { when: &["cause_2"], parts: &[Val("cause_1")] },
                ],
            ),
            Put("result_2", Shape("Content Placeholder 4-2r")),
        ],
    },
    Template {
        id: 69,
        rules: &[
            Title(Shape("Title 5")),
            Put("pro", Shape("ZoneTexte 71")),
            Put("con", Shape("ZoneTexte 72")),
            FanOut(
                "detail_1",
                &["ZoneTexte 77", "ZoneTexte 78", "ZoneTexte 80", "ZoneTexte 86", "ZoneTexte 86-2"],
            ),
            FanOut(
                "detail_2",
                &["ZoneTexte 47", "ZoneTexte 48", "ZoneTexte 49", "ZoneTexte 50", "ZoneTexte 50-2"],
            ),
        ],
    },
    Template {
        id: 71,
        rules: &[
            Title(Shape("Title 1")),
            Put("idea_1", Shape("Freeform 17")),
            Put("idea_2", Shape("Freeform 12")),
            Put("idea_3", Shape("Freeform 8")),
            Put("idea_4", Shape("Freeform 13")),
            Put("idea_5", Shape("Freeform 15")),
            Put("idea_6", Shape("Freeform 14")),
            Put("idea_7", Shape("Freeform 16")),
            Put("idea_8", Shape("Freeform 11")),
            Put("idea_9", Shape("Freeform 10")),
            Put("idea_10", Shape("Freeform 18")),
        ],
    },
    Template {
        id: 72,
        rules: &[
            Title(Shape("Title 1")),
            Put("title", Shape("Freeform 14")),
            Put("key_1", Shape("Freeform 15")),
            Put("detail_1", Shape("Espace réservé du contenu 5")),
            Put("key_2", Shape("Freeform 16")),
            Put("detail_2", Shape("Espace réservé du contenu 5-2")),
            Put("key_3", Shape("Freeform 10")),
            Put("detail_3", Shape("Espace réservé du contenu 5-3")),
            Put("key_4", Shape("Freeform 18")),
            Put("detail_4", Shape("Espace réservé du contenu 5-4")),
            Put("key_5", Shape("Freeform 8")),
            Put("detail_5", Shape("Espace réservé du contenu 5-5")),
            Put("key_6", Shape("Freeform 13")),
            Put("detail_6", Shape("Espace réservé du contenu 5-6")),
        ],
    },
    Template {
        id: 73,
        rules: &[
            Title(Shape("Title 1")),
            Put("idea_1", Shape("ZoneTexte 15")),
            Put("idea_2", Shape("ZoneTexte 632")),
            Put("idea_3", Shape("ZoneTexte 634")),
            Put("idea_4", Shape("ZoneTexte 635")),
            Put("idea_5", Shape("ZoneTexte 633")),
        ],
    },
    Template {
        id: 74,
        rules: &[
            Title(Shape("Title 1")),
            Put("idea_1", Grouped("Groupe 115", "ZoneTexte 109")),
            Put("detail_1", Shape("TextBox 91")),
            Put("idea_2", Grouped("Groupe 115", "ZoneTexte 111")),
            Put("detail_2", Shape("TextBox 91-2")),
            Put("idea_3", Grouped("Groupe 115", "ZoneTexte 112")),
            Put("detail_3", Shape("TextBox 91-3")),
            Put("idea_4", Grouped("Groupe 115", "ZoneTexte 113")),
            Put("detail_4", Shape("TextBox 91-4")),
        ],
    },
    Template {
        id: 75,
        rules: &[
            Title(Shape("Titre 1")),
            Put("objective_1", Shape("Rectangle 25")),
            Put("objective_2", Shape("Rectangle 26")),
            Put("objective_3", Shape("Rectangle 27")),
        ],
    },
    Template {
        id: 76,
        rules: &[
            Title(Shape("Titre 1")),
            Put("objective_1", Shape("Rectangle 14")),
            Put("objective_2", Shape("Rectangle 15")),
            Put("objective_3", Shape("Rectangle 16")),
            Put("objective_4", Shape("Rectangle 17")),
        ],
    },
    Template {
        id: 77,
        rules: &[
            Title(Shape("Titre 1")),
            Put("key_1", Cell("Table 7", 1, 1)),
            Put("detail_1", Cell("Table 7", 1, 2)),
            Put("key_2", Cell("Table 7", 2, 1)),
            Put("detail_2", Cell("Table 7", 2, 2)),
            Put("key_3", Cell("Table 7", 3, 1)),
            Put("detail_3", Cell("Table 7", 3, 2)),
            Put("key_4", Cell("Table 7", 4, 1)),
            Put("detail_4", Cell("Table 7", 4, 2)),
            Compose(
                Cell("Table 7", 1, 3),
                &[
                    Clause {
                        when: &["summary"],
                        parts: &[Lit("Summary:\n"), Val("summary"), Lit("\n")],
                    },
                    Clause {
                        when: &["next_steps"],
                        parts: &[Lit("Next Steps:\n"), Val("next_steps"), Lit("\n")],
                    },
                ],
            ),
        ],
    },
    Template {
        id: 78,
        rules: &[
            Title(Shape("Titre 1")),
            Put("objective", Shape("Heptagone 3")),
            Compose(
                Shape("Espace réservé du contenu 5"),
                &[
                    Clause { when: &["criteria_1"], parts: &[Val("criteria_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-2"),
                &[
                    Clause { when: &["criteria_2"], parts: &[Val("criteria_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-3"),
                &[
                    Clause { when: &["criteria_3"], parts: &[Val("criteria_3"), Lit("\n")] },
                    Clause { when: &["description_3"], parts: &[Val("description_3")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-4"),
                &[
                    Clause { when: &["criteria_4"], parts: &[Val("criteria_4"), Lit("\n")] },
                    Clause { when: &["description_4"], parts: &[Val("description_4")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-5"),
                &[
                    Clause { when: &["criteria_5"], parts: &[Val("criteria_5"), Lit("\n")] },
                    Clause { when: &["description_5"], parts: &[Val("description_5")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-6"),
                &[
                    Clause { when: &["criteria_6"], parts: &[Val("criteria_6"), Lit("\n")] },
                    Clause { when: &["description_6"], parts: &[Val("description_6")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-7"),
                &[
                    Clause { when: &["criteria_7"], parts: &[Val("criteria_7"), Lit("\n")] },
                    Clause { when: &["description_7"], parts: &[Val("description_7")] },
                ],
            ),
        ],
    },
    Template {
        id: 79,
        rules: &[
            Title(Shape("Titre 1")),
            Put("objective", Shape("Ellipse 2")),
            Compose(
                Shape("Espace réservé du contenu 5"),
                &[
                    Clause { when: &["criteria_1"], parts: &[Val("criteria_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-2"),
                &[
                    Clause { when: &["criteria_2"], parts: &[Val("criteria_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-3"),
                &[
                    Clause { when: &["criteria_3"], parts: &[Val("criteria_3"), Lit("\n")] },
                    Clause { when: &["description_3"], parts: &[Val("description_3")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-4"),
                &[
                    Clause { when: &["criteria_4"], parts: &[Val("criteria_4"), Lit("\n")] },
                    Clause { when: &["description_4"], parts: &[Val("description_4")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-5"),
                &[
                    Clause { when: &["criteria_5"], parts: &[Val("criteria_5"), Lit("\n")] },
                    Clause { when: &["description_5"], parts: &[Val("description_5")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-6"),
                &[
                    Clause { when: &["criteria_6"], parts: &[Val("criteria_6"), Lit("\n")] },
                    Clause { when: &["description_6"], parts: &[Val("description_6")] },
                ],
            ),
            Compose(
                Shape("Espace réservé du contenu 5-7"),
                &[
                    Clause { when: &["criteria_7"], parts: &[Val("criteria_7"), Lit("\n")] },
                    Clause { when: &["description_7"], parts: &[Val("description_7")] },
                ],
            ),
        ],
    },
    Template {
        id: 80,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Rectangle 12"),
                &[
                    Clause { when: &["principle_1"], parts: &[Val("principle_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 13"),
                &[
                    Clause { when: &["principle_2"], parts: &[Val("principle_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 14"),
                &[
                    Clause { when: &["principle_3"], parts: &[Val("principle_3"), Lit("\n")] },
                    Clause { when: &["description_3"], parts: &[Val("description_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 15"),
                &[
                    Clause { when: &["principle_4"], parts: &[Val("principle_4"), Lit("\n")] },
                    Clause { when: &["description_4"], parts: &[Val("description_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 81,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Rectangle 35"),
                &[
                    Clause { when: &["step_1"], parts: &[Val("step_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 36"),
                &[
                    Clause { when: &["step_2"], parts: &[Val("step_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 37"),
                &[
                    Clause { when: &["step_3"], parts: &[Val("step_3"), Lit("\n")] },
                    Clause { when: &["description_3"], parts: &[Val("description_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 38"),
                &[
                    Clause { when: &["step_4"], parts: &[Val("step_4"), Lit("\n")] },
                    Clause { when: &["description_4"], parts: &[Val("description_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 39"),
                &[
                    Clause { when: &["step_4"], parts: &[Val("step_4"), Lit("\n")] },
                    Clause { when: &["description_4"], parts: &[Val("description_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 83,
        rules: &[
            Title(Shape("Title 1")),
            Put("scenario_1", Shape("Rectangle 7")),
            Put("detail_1", Shape("TextBox 13")),
            Put("scenario_2", Shape("Rectangle 8")),
            Put("detail_2", Shape("TextBox 13-2")),
        ],
    },
    Template {
        id: 84,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 3"),
                &[
                    Clause { when: &["scenario_1"], parts: &[Val("scenario_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 4"),
                &[
                    Clause { when: &["scenario_2"], parts: &[Val("scenario_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
        ],
    },
    Template {
        id: 85,
        rules: &[
            Title(Shape("Title 1")),
            Put("scenario_1", Shape("Rectangle 7")),
            Put("detail_1", Shape("TextBox 13")),
            Put("scenario_2", Shape("Rectangle 8")),
            Put("detail_2", Shape("TextBox 13-2")),
            Put("scenario_3", Shape("Rectangle 9")),
            Put("detail_3", Shape("TextBox 13-3")),
        ],
    },
    Template {
        id: 86,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 3"),
                &[
                    Clause { when: &["scenario_1"], parts: &[Val("scenario_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 4"),
                &[
                    Clause { when: &["scenario_2"], parts: &[Val("scenario_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 5"),
                &[
                    Clause { when: &["scenario_3"], parts: &[Val("scenario_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
        ],
    },
    Template {
        id: 87,
        rules: &[
            Title(Shape("Title 1")),
            Put("scenario_1", Shape("Rectangle 7")),
            Put("detail_1", Shape("TextBox 13")),
            Put("scenario_2", Shape("Rectangle 8")),
            Put("detail_2", Shape("TextBox 13-2")),
            Put("scenario_3", Shape("Rectangle 9")),
            Put("detail_3", Shape("TextBox 13-3")),
            Put("scenario_4", Shape("Rectangle 17")),
            Put("detail_4", Shape("TextBox 13-4")),
        ],
    },
    Template {
        id: 88,
        rules: &[
            Title(Shape("Title 1")),
            Compose(
                Shape("Rectangle 3"),
                &[
                    Clause { when: &["scenario_1"], parts: &[Val("scenario_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 4"),
                &[
                    Clause { when: &["scenario_2"], parts: &[Val("scenario_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 5"),
                &[
                    Clause { when: &["scenario_3"], parts: &[Val("scenario_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 16"),
                &[
                    Clause { when: &["scenario_4"], parts: &[Val("scenario_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 89,
        rules: &[
            Title(Shape("Title 8")),
            Compose(
                Shape("Rectangle 3"),
                &[
                    Clause { when: &["scenario_1"], parts: &[Val("scenario_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 4"),
                &[
                    Clause { when: &["scenario_2"], parts: &[Val("scenario_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 5"),
                &[
                    Clause { when: &["scenario_3"], parts: &[Val("scenario_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 6"),
                &[
                    Clause { when: &["scenario_4"], parts: &[Val("scenario_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 34"),
                &[
                    Clause { when: &["scenario_5"], parts: &[Val("scenario_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
        ],
    },
    Template {
        id: 90,
        rules: &[
            Title(Shape("Title 8")),
            Compose(
                Shape("Rectangle 3"),
                &[
                    Clause { when: &["scenario_1"], parts: &[Val("scenario_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 4"),
                &[
                    Clause { when: &["scenario_2"], parts: &[Val("scenario_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 5"),
                &[
                    Clause { when: &["scenario_3"], parts: &[Val("scenario_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 6"),
                &[
                    Clause { when: &["scenario_4"], parts: &[Val("scenario_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 34"),
                &[
                    Clause { when: &["scenario_5"], parts: &[Val("scenario_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
        ],
    },
    Template {
        id: 91,
        rules: &[
            Title(Shape("Title 6")),
            Compose(
                Shape("Rectangle 3"),
                &[
                    Clause { when: &["scenario_1"], parts: &[Val("scenario_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 4"),
                &[
                    Clause { when: &["scenario_2"], parts: &[Val("scenario_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 5"),
                &[
                    Clause { when: &["scenario_3"], parts: &[Val("scenario_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 7"),
                &[
                    Clause { when: &["scenario_4"], parts: &[Val("scenario_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 8"),
                &[
                    Clause { when: &["scenario_5"], parts: &[Val("scenario_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
            Compose(
                Shape("Rectangle 9"),
                &[
                    Clause { when: &["scenario_6"], parts: &[Val("scenario_6"), Lit("\n")] },
                    Clause { when: &["detail_6"], parts: &[Val("detail_6")] },
                ],
            ),
        ],
    },
    Template {
        id: 92,
        rules: &[
            Title(Shape("Title 3")),
            Put("scenario_1", Shape("ZoneTexte 11")),
            Put("detail_1", Shape("TextBox 7")),
            Put("scenario_2", Shape("Rectangle 11-2")),
            Put("detail_2", Shape("TextBox 8")),
            Put("scenario_3", Shape("Rectangle 11-3")),
            Put("detail_3", Shape("TextBox 9")),
        ],
    },
    Template {
        id: 93,
        rules: &[
            Title(Shape("Title 3")),
            Put("scenario_1", Shape("ZoneTexte 11")),
            Put("detail_1", Shape("TextBox 7")),
            Put("scenario_2", Shape("Rectangle 11-2")),
            Put("detail_2", Shape("TextBox 8")),
            Put("scenario_3", Shape("Rectangle 11-3")),
            Put("detail_3", Shape("TextBox 9")),
            Put("scenario_4", Shape("Rectangle 11-4")),
            Put("detail_4", Shape("TextBox 13")),
        ],
    },
    Template {
        id: 95,
        rules: &[
            Title(Shape("Title 3")),
            Put("scenario_1", Cell("Table 2", 1, 1)),
            Put("scenario_2", Cell("Table 2", 1, 2)),
            Put("characteristic_1", Cell("Table 2", 2, 1)),
            Put("detail_1", Cell("Table 2", 3, 1)),
            Put("detail_2", Cell("Table 2", 3, 2)),
            Put("characteristic_2", Cell("Table 2", 4, 1)),
            Put("detail_3", Cell("Table 2", 5, 1)),
            Put("detail_4", Cell("Table 2", 5, 2)),
            Put("characteristic_3", Cell("Table 2", 6, 1)),
            Put("detail_5", Cell("Table 2", 7, 1)),
            Put("detail_6", Cell("Table 2", 7, 2)),
            Put("comments", Shape("Content Placeholder 4")),
        ],
    },
    Template {
        id: 96,
        rules: &[
            Title(Shape("Title 3")),
            Put("scenario_1", Cell("Table 2", 1, 1)),
            Put("scenario_2", Cell("Table 2", 1, 2)),
            Put("scenario_3", Cell("Table 2", 1, 3)),
            Put("characteristic_1", Cell("Table 2", 2, 1)),
            Put("detail_1", Cell("Table 2", 3, 1)),
            Put("detail_2", Cell("Table 2", 3, 2)),
            Put("detail_3", Cell("Table 2", 3, 3)),
            Put("characteristic_2", Cell("Table 2", 4, 1)),
            Put("detail_4", Cell("Table 2", 5, 1)),
            Put("detail_5", Cell("Table 2", 5, 2)),
            Put("detail_6", Cell("Table 2", 5, 3)),
            Put("characteristic_3", Cell("Table 2", 6, 1)),
            Put("detail_7", Cell("Table 2", 7, 1)),
            Put("detail_8", Cell("Table 2", 7, 2)),
            Put("detail_9", Cell("Table 2", 7, 3)),
            Put("comments", Shape("Content Placeholder 4")),
        ],
    },
    Template {
        id: 100,
        rules: &[
            Title(Shape("Title 2")),
            Put("comments", Shape("Content Placeholder 13")),
            Put("in_scope", Cell("Table 1", 2, 1)),
            Put("in_scope", Cell("Table 1", 2, 2)),
        ],
    },
    Template {
        id: 101,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Table 5", 2, 1)),
            Put("theme_2", Cell("Table 5", 3, 1)),
            Put("criteria_1", Cell("Table 5", 1, 2)),
            Put("criteria_2", Cell("Table 5", 1, 3)),
            Put("detail_1", Cell("Table 5", 2, 2)),
            Put("detail_2", Cell("Table 5", 2, 3)),
            Put("detail_3", Cell("Table 5", 3, 2)),
            Put("detail_4", Cell("Table 5", 3, 3)),
        ],
    },
    Template {
        id: 102,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Table 5", 2, 1)),
            Put("theme_2", Cell("Table 5", 3, 1)),
            Put("theme_3", Cell("Table 5", 4, 1)),
            Put("criteria_1", Cell("Table 5", 1, 2)),
            Put("criteria_2", Cell("Table 5", 1, 3)),
            Put("detail_1", Cell("Table 5", 2, 2)),
            Put("detail_2", Cell("Table 5", 2, 3)),
            Put("detail_3", Cell("Table 5", 3, 2)),
            Put("detail_4", Cell("Table 5", 3, 3)),
            Put("detail_5", Cell("Table 5", 4, 2)),
            Put("detail_6", Cell("Table 5", 4, 3)),
        ],
    },
    Template {
        id: 103,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Table 5", 2, 1)),
            Put("theme_2", Cell("Table 5", 3, 1)),
            Put("theme_3", Cell("Table 5", 4, 1)),
            Put("theme_4", Cell("Table 5", 5, 1)),
            Put("criteria_1", Cell("Table 5", 1, 2)),
            Put("criteria_2", Cell("Table 5", 1, 3)),
            Put("detail_1", Cell("Table 5", 2, 2)),
            Put("detail_2", Cell("Table 5", 2, 3)),
            Put("detail_3", Cell("Table 5", 3, 2)),
            Put("detail_4", Cell("Table 5", 3, 3)),
            Put("detail_5", Cell("Table 5", 4, 2)),
            Put("detail_6", Cell("Table 5", 4, 3)),
            Put("detail_7", Cell("Table 5", 5, 2)),
            Put("detail_8", Cell("Table 5", 5, 3)),
        ],
    },
    Template {
        id: 104,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Table 5", 2, 1)),
            Put("theme_2", Cell("Table 5", 3, 1)),
            Put("criteria_1", Cell("Table 5", 1, 2)),
            Put("criteria_2", Cell("Table 5", 1, 3)),
            Put("criteria_3", Cell("Table 5", 1, 4)),
            Put("detail_1", Cell("Table 5", 2, 2)),
            Put("detail_2", Cell("Table 5", 2, 3)),
            Put("detail_3", Cell("Table 5", 2, 4)),
            Put("detail_4", Cell("Table 5", 3, 2)),
            Put("detail_5", Cell("Table 5", 3, 3)),
            Put("detail_6", Cell("Table 5", 3, 4)),
        ],
    },
    Template {
        id: 105,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Table 5", 2, 1)),
            Put("theme_2", Cell("Table 5", 3, 1)),
            Put("theme_3", Cell("Table 5", 4, 1)),
            Put("criteria_1", Cell("Table 5", 1, 2)),
            Put("criteria_2", Cell("Table 5", 1, 3)),
            Put("criteria_3", Cell("Table 5", 1, 4)),
            Put("detail_1", Cell("Table 5", 2, 2)),
            Put("detail_2", Cell("Table 5", 2, 3)),
            Put("detail_3", Cell("Table 5", 2, 4)),
            Put("detail_4", Cell("Table 5", 3, 2)),
            Put("detail_5", Cell("Table 5", 3, 3)),
            Put("detail_6", Cell("Table 5", 3, 4)),
            Put("detail_7", Cell("Table 5", 4, 2)),
            Put("detail_8", Cell("Table 5", 4, 3)),
            Put("detail_9", Cell("Table 5", 4, 4)),
        ],
    },
    Template {
        id: 106,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Table 5", 2, 1)),
            Put("theme_2", Cell("Table 5", 3, 1)),
            Put("theme_3", Cell("Table 5", 4, 1)),
            Put("theme_4", Cell("Table 5", 5, 1)),
            Put("criteria_1", Cell("Table 5", 1, 2)),
            Put("criteria_2", Cell("Table 5", 1, 3)),
            Put("criteria_3", Cell("Table 5", 1, 4)),
            Put("detail_1", Cell("Table 5", 2, 2)),
            Put("detail_2", Cell("Table 5", 2, 3)),
            Put("detail_3", Cell("Table 5", 2, 4)),
            Put("detail_4", Cell("Table 5", 3, 2)),
            Put("detail_5", Cell("Table 5", 3, 3)),
            Put("detail_6", Cell("Table 5", 3, 4)),
            Put("detail_7", Cell("Table 5", 4, 2)),
            Put("detail_8", Cell("Table 5", 4, 3)),
            Put("detail_9", Cell("Table 5", 4, 4)),
            Put("detail_10", Cell("Table 5", 5, 2)),
            Put("detail_11", Cell("Table 5", 5, 3)),
            Put("detail_12", Cell("Table 5", 5, 4)),
        ],
    },
    Template {
        id: 107,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Cell("Tableau 18", 2, 1),
                &[
                    Clause { when: &["idea_1"], parts: &[Lit("1. "), Val("idea_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Cell("Tableau 18", 3, 1),
                &[
                    Clause { when: &["idea_2"], parts: &[Lit("2. "), Val("idea_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Put("pro_1", Cell("Tableau 18", 2, 2)),
            Put("con_1", Cell("Tableau 18", 2, 3)),
            Put("pro_2", Cell("Tableau 18", 3, 2)),
            Put("con_2", Cell("Tableau 18", 3, 3)),
        ],
    },
    Template {
        id: 108,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Cell("Tableau 18", 2, 1),
                &[
                    Clause { when: &["idea_1"], parts: &[Lit("1. "), Val("idea_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Cell("Tableau 18", 3, 1),
                &[
                    Clause { when: &["idea_2"], parts: &[Lit("2. "), Val("idea_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Compose(
                Cell("Tableau 18", 4, 1),
                &[
                    Clause { when: &["idea_3"], parts: &[Lit("3. "), Val("idea_3"), Lit("\n")] },
                    Clause { when: &["description_3"], parts: &[Val("description_3")] },
                ],
            ),
            Put("pro_1", Cell("Tableau 18", 2, 2)),
            Put("con_1", Cell("Tableau 18", 2, 3)),
            Put("pro_2", Cell("Tableau 18", 3, 2)),
            Put("con_2", Cell("Tableau 18", 3, 3)),
            Put("pro_3", Cell("Tableau 18", 4, 2)),
            Put("con_3", Cell("Tableau 18", 4, 3)),
        ],
    },
    Template {
        id: 109,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Cell("Tableau 18", 2, 1),
                &[
                    Clause { when: &["idea_1"], parts: &[Lit("1. "), Val("idea_1"), Lit("\n")] },
                    Clause { when: &["description_1"], parts: &[Val("description_1")] },
                ],
            ),
            Compose(
                Cell("Tableau 18", 3, 1),
                &[
                    Clause { when: &["idea_2"], parts: &[Lit("2. "), Val("idea_2"), Lit("\n")] },
                    Clause { when: &["description_2"], parts: &[Val("description_2")] },
                ],
            ),
            Compose(
                Cell("Tableau 18", 4, 1),
                &[
                    Clause { when: &["idea_3"], parts: &[Lit("3. "), Val("idea_3"), Lit("\n")] },
                    Clause { when: &["description_3"], parts: &[Val("description_3")] },
                ],
            ),
            Compose(
                Cell("Tableau 18", 5, 1),
                &[
                    Clause { when: &["idea_4"], parts: &[Lit("4. "), Val("idea_4"), Lit("\n")] },
                    Clause { when: &["description_4"], parts: &[Val("description_4")] },
                ],
            ),
            Put("pro_1", Cell("Tableau 18", 2, 2)),
            Put("con_1", Cell("Tableau 18", 2, 3)),
            Put("pro_2", Cell("Tableau 18", 3, 2)),
            Put("con_2", Cell("Tableau 18", 3, 3)),
            Put("pro_3", Cell("Tableau 18", 4, 2)),
            Put("con_3", Cell("Tableau 18", 4, 3)),
            Put("pro_4", Cell("Tableau 18", 5, 2)),
            Put("con_4", Cell("Tableau 18", 5, 3)),
        ],
    },
    Template {
        id: 110,
        rules: &[
            Title(Shape("Titre 1")),
            Put("theme_1", Cell("Tableau 5", 1, 1)),
            Put("theme_2", Cell("Tableau 5", 1, 2)),
            Put("detail_1", Cell("Tableau 5", 2, 1)),
            Put("detail_2", Cell("Tableau 5", 2, 2)),
            Put("detail_3", Cell("Tableau 5", 3, 1)),
            Put("detail_4", Cell("Tableau 5", 3, 2)),
            Put("detail_5", Cell("Tableau 5", 4, 1)),
            Put("detail_6", Cell("Tableau 5", 4, 2)),
        ],
    },
    Template {
        id: 112,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Cell("Table 7", 1, 3),
                &[
                    Clause {
                        when: &["kpi_1", "kpi_1_unit"],
                        parts: &[Val("kpi_1"), Lit("\n"), Val("kpi_1_unit")],
                    },
                ],
            ),
            Compose(
                Cell("Table 7", 1, 4),
                &[
                    Clause {
                        when: &["kpi_2", "kpi_2_unit"],
                        parts: &[Val("kpi_2"), Lit("\n"), Val("kpi_2_unit")],
                    },
                ],
            ),
            Put("scenario_1", Cell("Table 7", 2, 1)),
            Put("scenario_2", Cell("Table 7", 3, 2)),
            Put("scenario_3", Cell("Table 7", 4, 2)),
        ],
    },
    Template {
        id: 113,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Cell("Table 7", 1, 3),
                &[
                    Clause {
                        when: &["kpi_1", "kpi_1_unit"],
                        parts: &[Val("kpi_1"), Lit("\n"), Val("kpi_1_unit")],
                    },
                ],
            ),
            Compose(
                Cell("Table 7", 1, 4),
                &[
                    Clause {
                        when: &["kpi_2", "kpi_2_unit"],
                        parts: &[Val("kpi_2"), Lit("\n"), Val("kpi_2_unit")],
                    },
                ],
            ),
            Put("scenario_1", Cell("Table 7", 2, 1)),
            Put("scenario_2", Cell("Table 7", 3, 2)),
            Put("scenario_3", Cell("Table 7", 4, 2)),
            Put("scenario_4", Cell("Table 7", 5, 2)),
        ],
    },
    Template {
        id: 115,
        rules: &[
            Title(Shape("Title 1")),
            Put("phase_1", Shape("Rectangle 9")),
            Put("phase_2", Shape("Rectangle 23")),
            Put("phase_3", Shape("Rectangle 25")),
            Put("phase_4", Shape("Rectangle 27")),
        ],
    },
    Template {
        id: 116,
        rules: &[
            Title(Shape("Title 8")),
            Compose(
                Shape("Rectangle 19"),
                &[
                    Clause { when: &["phase_1"], parts: &[Val("phase_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 10"),
                &[
                    Clause { when: &["phase_2"], parts: &[Val("phase_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 11"),
                &[
                    Clause { when: &["phase_3"], parts: &[Val("phase_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 68"),
                &[
                    Clause { when: &["phase_4"], parts: &[Val("phase_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 117,
        rules: &[
            Title(Shape("Title 8")),
            Compose(
                Shape("Rectangle 20"),
                &[
                    Clause { when: &["phase_1"], parts: &[Val("phase_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 10"),
                &[
                    Clause { when: &["phase_2"], parts: &[Val("phase_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 11"),
                &[
                    Clause { when: &["phase_3"], parts: &[Val("phase_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 68"),
                &[
                    Clause { when: &["phase_4"], parts: &[Val("phase_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 27"),
                &[
                    Clause { when: &["phase_5"], parts: &[Val("phase_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
        ],
    },
    Template {
        id: 118,
        rules: &[
            Title(Shape("Title 8")),
            Compose(
                Shape("Rectangle 26"),
                &[
                    Clause { when: &["phase_1"], parts: &[Val("phase_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("Rectangle 10"),
                &[
                    Clause { when: &["phase_2"], parts: &[Val("phase_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Compose(
                Shape("Rectangle 11"),
                &[
                    Clause { when: &["phase_3"], parts: &[Val("phase_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("Rectangle 68"),
                &[
                    Clause { when: &["phase_4"], parts: &[Val("phase_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Compose(
                Shape("Rectangle 21"),
                &[
                    Clause { when: &["phase_5"], parts: &[Val("phase_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
            Compose(
                Shape("Rectangle 23"),
                &[
                    Clause { when: &["phase_6"], parts: &[Val("phase_6"), Lit("\n")] },
                    Clause { when: &["detail_6"], parts: &[Val("detail_6")] },
                ],
            ),
        ],
    },
    Template {
        id: 119,
        rules: &[
            Title(Shape("Title 9")),
            Put("step_1", Shape("Rectangle 32")),
            Put("deliverable_1", Shape("Rectangle 24")),
            Put("step_2", Shape("Rectangle 35")),
            Put("deliverable_2", Shape("Rectangle 34")),
            Put("step_3", Shape("Rectangle 36")),
            Put("deliverable_3", Shape("Rectangle 44")),
        ],
    },
    Template {
        id: 120,
        rules: &[
            Title(Shape("Title 12")),
            Put("step_1", Shape("Rectangle 42")),
            Put("deliverable_1", Shape("Rectangle 41")),
            Put("step_2", Shape("Rectangle 43")),
            Put("deliverable_2", Shape("Rectangle 46")),
            Put("step_3", Shape("Rectangle 45")),
            Put("deliverable_3", Shape("Rectangle 48")),
            Put("step_4", Shape("Rectangle 55")),
            Put("deliverable_4", Shape("Rectangle 56")),
        ],
    },
    Template {
        id: 121,
        rules: &[
            Title(Shape("Title 4")),
            Compose(
                Shape("TextBox 9"),
                &[
                    Clause { when: &["step_1"], parts: &[Lit("Step 1\n"), Val("step_1")] },
                ],
            ),
            Compose(
                Shape("TextBox 12"),
                &[
                    Clause { when: &["step_2"], parts: &[Lit("Step 2\n"), Val("step_2")] },
                ],
            ),
            Compose(
                Shape("TextBox 10"),
                &[
                    Clause { when: &["step_3"], parts: &[Lit("Step 3\n"), Val("step_3")] },
                ],
            ),
            Compose(
                Shape("TextBox 11"),
                &[
                    Clause { when: &["step_4"], parts: &[Lit("Step 4\n"), Val("step_4")] },
                ],
            ),
        ],
    },
    Template {
        id: 122,
        rules: &[
            Title(Shape("Title 12")),
            Put("step_1", Shape("Rectangle 51")),
            Put("step_2", Shape("Rectangle 56")),
            Put("step_3", Shape("Rectangle 57")),
        ],
    },
    Template {
        id: 123,
        rules: &[
            Title(Shape("Title 12")),
            Put("step_1", Shape("Rectangle 51")),
            Put("step_2", Shape("Rectangle 56")),
            Put("step_3", Shape("Rectangle 57")),
        ],
    },
    Template {
        id: 124,
        rules: &[
            Title(Shape("Title 12")),
            Put("step_1", Shape("Rectangle 51")),
            Put("step_2", Shape("Rectangle 56")),
            Put("step_3", Shape("Rectangle 57")),
            Put("step_4", Shape("Rectangle 58")),
        ],
    },
    Template {
        id: 125,
        rules: &[
            Title(Shape("Title 12")),
            Put("step_1", Shape("Rectangle 51")),
            Put("step_2", Shape("Rectangle 56")),
            Put("step_3", Shape("Rectangle 57")),
            Put("step_4", Shape("Rectangle 58")),
        ],
    },
    Template {
        id: 126,
        rules: &[
            Title(Shape("Title 12")),
            Put("step_1", Shape("Rectangle 51")),
            Put("step_2", Shape("Rectangle 56")),
            Put("step_3", Shape("Rectangle 57")),
            Put("step_4", Shape("Rectangle 58")),
            Put("step_5", Shape("Rectangle 59")),
        ],
    },
    Template {
        id: 127,
        rules: &[
            Title(Shape("Title 4")),
            Compose(
                Shape("TextBox 66"),
                &[
                    Clause { when: &["step_1"], parts: &[Val("step_1"), Lit("\n")] },
                    Clause { when: &["deliverable_1"], parts: &[Val("deliverable_1")] },
                ],
            ),
            Compose(
                Shape("TextBox 68"),
                &[
                    Clause { when: &["step_2"], parts: &[Val("step_2"), Lit("\n")] },
                    Clause { when: &["deliverable_2"], parts: &[Val("deliverable_2")] },
                ],
            ),
            Compose(
                Shape("TextBox 65"),
                &[
                    Clause { when: &["step_3"], parts: &[Val("step_3"), Lit("\n")] },
                    Clause { when: &["deliverable_3"], parts: &[Val("deliverable_3")] },
                ],
            ),
            Compose(
                Shape("TextBox 67"),
                &[
                    Clause { when: &["step_4"], parts: &[Val("step_4"), Lit("\n")] },
                    Clause { when: &["deliverable_4"], parts: &[Val("deliverable_4")] },
                ],
            ),
            Compose(
                Shape("TextBox 63"),
                &[
                    Clause { when: &["step_5"], parts: &[Val("step_5"), Lit("\n")] },
                    Clause { when: &["deliverable_5"], parts: &[Val("deliverable_5")] },
                ],
            ),
        ],
    },
    Template {
        id: 128,
        rules: &[
            Title(Shape("Title 71")),
            Put("step_1", Grouped("Groupe 21", "TextBox 65")),
            Put("description_1", Shape("TextBox 59-1")),
            Put("step_2", Grouped("Groupe 21", "TextBox 68")),
            Put("description_2", Shape("TextBox 59-2")),
            Put("step_3", Grouped("Groupe 21", "TextBox 66")),
            Put("description_3", Shape("TextBox 59-3")),
            Put("step_4", Grouped("Groupe 21", "TextBox 69")),
            Put("description_4", Shape("TextBox 59-4")),
            Put("step_5", Grouped("Groupe 21", "TextBox 67")),
            Put("description_5", Shape("TextBox 59-5")),
            Put("step_6", Grouped("Groupe 21", "TextBox 70")),
            Put("description_6", Shape("TextBox 59-6")),
        ],
    },
    Template {
        id: 129,
        rules: &[
            Title(Shape("Title 71")),
            Put("step_1", Grouped("Groupe 21", "TextBox 65")),
            Put("description_1", Shape("TextBox 59-1")),
            Put("step_2", Grouped("Groupe 21", "TextBox 68")),
            Put("description_2", Shape("TextBox 59-2")),
            Put("step_3", Grouped("Groupe 21", "TextBox 66")),
            Put("description_3", Shape("TextBox 59-3")),
        ],
    },
    Template {
        id: 130,
        rules: &[
            Title(Shape("Title 71")),
            Put("step_1", Grouped("Groupe 21", "TextBox 65")),
            Put("description_1", Shape("TextBox 59-1")),
            Put("step_2", Grouped("Groupe 21", "TextBox 68")),
            Put("description_2", Shape("TextBox 59-2")),
            Put("step_3", Grouped("Groupe 21", "TextBox 66")),
            Put("description_3", Shape("TextBox 59-3")),
            Put("step_4", Grouped("Groupe 21", "TextBox 69")),
            Put("description_4", Shape("TextBox 59-4")),
        ],
    },
    Template {
        id: 131,
        rules: &[
            Title(Shape("Title 71")),
            Put("step_1", Shape("TextBox 65")),
            Put("description_1", Shape("TextBox 59-1")),
            Put("step_2", Shape("TextBox 68")),
            Put("description_2", Shape("TextBox 59-2")),
            Put("step_3", Shape("TextBox 66")),
            Put("description_3", Shape("TextBox 59-3")),
            Put("step_4", Shape("TextBox 69")),
            Put("description_4", Shape("TextBox 59-4")),
            Put("step_5", Shape("TextBox 67")),
            Put("description_5", Shape("TextBox 59-5")),
        ],
    },
    Template {
        id: 135,
        rules: &[
            Title(Shape("Titre 1")),
            Put("step_1", Shape("Flèche : pentagone 3")),
            Compose(
                Shape("ZoneTexte 24"),
                &[
                    Clause { when: &["deliverable_1"], parts: &[Val("deliverable_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 28"),
                &[
                    Clause { when: &["deliverable_2"], parts: &[Val("deliverable_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Put("step_2", Shape("Flèche : chevron 4")),
            Compose(
                Shape("ZoneTexte 29"),
                &[
                    Clause { when: &["deliverable_3"], parts: &[Val("deliverable_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 30"),
                &[
                    Clause { when: &["deliverable_4"], parts: &[Val("deliverable_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Put("step_3", Shape("Flèche : chevron 5")),
            Compose(
                Shape("ZoneTexte 33"),
                &[
                    Clause { when: &["deliverable_5"], parts: &[Val("deliverable_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 34"),
                &[
                    Clause { when: &["deliverable_6"], parts: &[Val("deliverable_6"), Lit("\n")] },
                    Clause { when: &["detail_6"], parts: &[Val("detail_6")] },
                ],
            ),
        ],
    },
    Template {
        id: 136,
        rules: &[
            Title(Shape("Titre 1")),
            Put("step_1", Shape("Flèche : pentagone 3")),
            Compose(
                Shape("ZoneTexte 24"),
                &[
                    Clause { when: &["deliverable_1"], parts: &[Val("deliverable_1"), Lit("\n")] },
                    Clause { when: &["detail_1"], parts: &[Val("detail_1")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 28"),
                &[
                    Clause { when: &["deliverable_2"], parts: &[Val("deliverable_2"), Lit("\n")] },
                    Clause { when: &["detail_2"], parts: &[Val("detail_2")] },
                ],
            ),
            Put("step_2", Shape("Flèche : chevron 4")),
            Compose(
                Shape("ZoneTexte 80"),
                &[
                    Clause { when: &["deliverable_3"], parts: &[Val("deliverable_3"), Lit("\n")] },
                    Clause { when: &["detail_3"], parts: &[Val("detail_3")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 81"),
                &[
                    Clause { when: &["deliverable_4"], parts: &[Val("deliverable_4"), Lit("\n")] },
                    Clause { when: &["detail_4"], parts: &[Val("detail_4")] },
                ],
            ),
            Put("step_3", Shape("Flèche : chevron 5")),
            Compose(
                Shape("ZoneTexte 82"),
                &[
                    Clause { when: &["deliverable_5"], parts: &[Val("deliverable_5"), Lit("\n")] },
                    Clause { when: &["detail_5"], parts: &[Val("detail_5")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 83"),
                &[
                    Clause { when: &["deliverable_6"], parts: &[Val("deliverable_6"), Lit("\n")] },
                    Clause { when: &["detail_6"], parts: &[Val("detail_6")] },
                ],
            ),
            Put("step_4", Shape("Flèche : chevron 65")),
            Compose(
                Shape("ZoneTexte 84"),
                &[
                    Clause { when: &["deliverable_7"], parts: &[Val("deliverable_7"), Lit("\n")] },
                    Clause { when: &["detail_7"], parts: &[Val("detail_7")] },
                ],
            ),
            Compose(
                Shape("ZoneTexte 85"),
                &[
                    Clause { when: &["deliverable_8"], parts: &[Val("deliverable_8"), Lit("\n")] },
                    Clause { when: &["detail_8"], parts: &[Val("detail_8")] },
                ],
            ),
        ],
    },
    Template {
        id: 137,
        rules: &[
            Title(Shape("Title 1")),
            Put("phase_1", Shape("Pentagone 17")),
            Put("phase_2", Shape("Chevron 10")),
            Put("phase_3", Shape("Chevron 24")),
            Put("characteristic_1", Cell("Content Placeholder 3", 1, 1)),
            Put("characteristic_2", Cell("Content Placeholder 3", 3, 1)),
            Put("characteristic_3", Cell("Content Placeholder 3", 5, 1)),
            Put("description_1", Cell("Content Placeholder 3", 2, 1)),
            Put("description_2", Cell("Content Placeholder 3", 2, 2)),
            Put("description_3", Cell("Content Placeholder 3", 2, 3)),
            Put("detail_1", Cell("Content Placeholder 3", 4, 1)),
            Put("detail_2", Cell("Content Placeholder 3", 4, 2)),
            Put("detail_3", Cell("Content Placeholder 3", 4, 3)),
            Put("detail_4", Cell("Content Placeholder 3", 6, 1)),
            Put("detail_5", Cell("Content Placeholder 3", 6, 2)),
            Put("detail_6", Cell("Content Placeholder 3", 6, 3)),
        ],
    },
    Template {
        id: 138,
        rules: &[
            Title(Shape("Title 1")),
            Put("phase_1", Shape("Pentagone 17")),
            Put("phase_2", Shape("Chevron 10")),
            Put("phase_3", Shape("Chevron 24")),
            Put("phase_4", Shape("Chevron 24-2")),
            Put("characteristic_1", Cell("Content Placeholder 3", 1, 1)),
            Put("characteristic_2", Cell("Content Placeholder 3", 3, 1)),
            Put("characteristic_3", Cell("Content Placeholder 3", 5, 1)),
            Put("description_1", Cell("Content Placeholder 3", 2, 1)),
            Put("description_2", Cell("Content Placeholder 3", 2, 2)),
            Put("description_3", Cell("Content Placeholder 3", 2, 3)),
            Put("description_4", Cell("Content Placeholder 3", 2, 4)),
            Put("detail_1", Cell("Content Placeholder 3", 4, 1)),
            Put("detail_2", Cell("Content Placeholder 3", 4, 2)),
            Put("detail_3", Cell("Content Placeholder 3", 4, 3)),
            Put("detail_4", Cell("Content Placeholder 3", 4, 4)),
            Put("detail_5", Cell("Content Placeholder 3", 6, 1)),
            Put("detail_6", Cell("Content Placeholder 3", 6, 2)),
            Put("detail_7", Cell("Content Placeholder 3", 6, 3)),
            Put("detail_8", Cell("Content Placeholder 3", 6, 4)),
        ],
    },
    Template {
        id: 139,
        rules: &[
            Title(Shape("Title 3")),
            Put("phase_1", Shape("Rectangle 89")),
            Put("phase_2", Shape("Rectangle 68")),
            Put("phase_3", Shape("Rectangle 61")),
            Put("characteristic_1", Shape("ZoneTexte 32")),
            Put("characteristic_2", Shape("ZoneTexte 33")),
            Put("characteristic_3", Shape("ZoneTexte 36")),
            Put("detail_1", Shape("ZoneTexte 43")),
            Put("detail_2", Shape("ZoneTexte 44")),
            Put("detail_3", Shape("ZoneTexte 45")),
            Put("detail_4", Shape("ZoneTexte 40")),
            Put("detail_5", Shape("ZoneTexte 41")),
            Put("detail_6", Shape("ZoneTexte 42")),
            Put("detail_7", Shape("ZoneTexte 49")),
            Put("detail_8", Shape("ZoneTexte 47")),
            Put("detail_9", Shape("ZoneTexte 46")),
        ],
    },
    Template {
        id: 143,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Google Shape;2350;p252"),
                &[
                    Clause { when: &["step_number"], parts: &[Lit("Step #"), Val("step_number")] },
                ],
            ),
            Put("step_title", Shape("Google Shape;2352;p252")),
            Put("step_description", Shape("Content Placeholder 5")),
            Compose(
                Shape("Google Shape;2359;p252"),
                &[
                    Clause {
                        when: &["ksf_1_title", "ksf_1_description"],
                        parts: &[Val("ksf_1_title"), Lit("\n"), Val("ksf_1_description")],
                    },
                ],
            ),
            Compose(
                Shape("Google Shape;2359;p252-2"),
                &[
                    Clause {
                        when: &["ksf_2_title", "ksf_2_description"],
                        parts: &[Val("ksf_2_title"), Lit("\n"), Val("ksf_2_description")],
                    },
                ],
            ),
            Compose(
                Shape("Google Shape;2359;p252-3"),
                &[
                    Clause {
                        when: &["ksf_3_title", "ksf_3_description"],
                        parts: &[Val("ksf_3_title"), Lit("\n"), Val("ksf_3_description")],
                    },
                ],
            ),
            Compose(
                Shape("Google Shape;2359;p252-4"),
                &[
                    Clause {
                        when: &["ksf_4_title", "ksf_4_description"],
                        parts: &[Val("ksf_4_title"), Lit("\n"), Val("ksf_4_description")],
                    },
                ],
            ),
        ],
    },
    Template {
        id: 144,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Google Shape;2260;p246-1"),
                &[
                    Clause { when: &["step_1"], parts: &[Lit("1\n"), Val("step_1")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2260;p246-2"),
                &[
                    Clause { when: &["step_2"], parts: &[Lit("2\n"), Val("step_2")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2260;p246-3"),
                &[
                    Clause { when: &["step_3"], parts: &[Lit("3\n"), Val("step_3")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2262;p246"),
                &[
                    Clause {
                        when: &["step_subtitle", "step_description"],
                        parts: &[Val("step_subtitle"), Lit("\n\n"), Val("step_description")],
                    },
                ],
            ),
        ],
    },
    Template {
        id: 145,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Google Shape;2260;p246-1"),
                &[
                    Clause { when: &["step_1"], parts: &[Lit("1\n"), Val("step_1")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2260;p246-2"),
                &[
                    Clause { when: &["step_2"], parts: &[Lit("2\n"), Val("step_2")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2260;p246-3"),
                &[
                    Clause { when: &["step_3"], parts: &[Lit("3\n"), Val("step_3")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2262;p246"),
                &[
                    Clause {
                        when: &["step_subtitle", "step_description"],
                        parts: &[Val("step_subtitle"), Lit("\n\n"), Val("step_description")],
                    },
                ],
            ),
        ],
    },
    Template {
        id: 146,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Google Shape;2260;p246-1"),
                &[
                    Clause { when: &["step_1"], parts: &[Lit("1\n"), Val("step_1")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2260;p246-2"),
                &[
                    Clause { when: &["step_2"], parts: &[Lit("2\n"), Val("step_2")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2260;p246-3"),
                &[
                    Clause { when: &["step_3"], parts: &[Lit("3\n"), Val("step_3")] },
                ],
            ),
            Compose(
                Shape("Google Shape;2262;p246"),
                &[
                    Clause {
                        when: &["step_subtitle", "step_description"],
                        parts: &[Val("step_subtitle"), Lit("\n\n"), Val("step_description")],
                    },
                ],
            ),
        ],
    },
    Template {
        id: 147,
        rules: &[
            Title(Shape("Title 12")),
            Put("description_1", Shape("Rectangle 13")),
            Put("description_2", Shape("Rectangle 68")),
            Put("description_3", Shape("Rectangle 72")),
            Put("description_4", Shape("Rectangle 84")),
        ],
    },
    Template {
        id: 148,
        rules: &[
            Title(Shape("Title 12")),
            Put("description_1", Shape("Rectangle 13")),
            Put("description_2", Shape("Rectangle 68")),
            Put("description_3", Shape("Rectangle 72")),
            Put("description_4", Shape("Rectangle 76")),
            Put("description_5", Shape("Rectangle 84")),
        ],
    },
    Template {
        id: 149,
        rules: &[
            Title(Shape("Title 12")),
            Put("description_1", Shape("Rectangle 13")),
            Put("description_2", Shape("Rectangle 68")),
            Put("description_3", Shape("Rectangle 72")),
            Put("description_4", Shape("Rectangle 76")),
            Put("description_5", Shape("Rectangle 80")),
            Put("description_6", Shape("Rectangle 84")),
        ],
    },
    Template {
        id: 150,
        rules: &[
            Title(Shape("Titre 1")),
            Put("week_1_content", Shape("Rectangle 9")),
            Put("week_2_content", Shape("Rectangle 8")),
            Put("week_3_content", Shape("Rectangle 6")),
            Put("final_day_content", Shape("Rectangle 5")),
        ],
    },
    Template {
        id: 151,
        rules: &[
            Title(Shape("Titre 1")),
            Put("week_1_content", Shape("Rectangle 10")),
            Put("week_2_content", Shape("Rectangle 9")),
            Put("week_3_content", Shape("Rectangle 8")),
            Put("week_4_content", Shape("Rectangle 6")),
            Put("final_day_content", Shape("Rectangle 5")),
        ],
    },
    Template {
        id: 152,
        rules: &[
            Title(Shape("Titre 1")),
            Compose(
                Shape("Rectangle 24"),
                &[
                    Clause {
                        when: &["success_key_1", "description_1"],
                        parts: &[Val("success_key_1"), Lit("\n"), Val("description_1")],
                    },
                ],
            ),
            // reads "success_key_1" under the "success_key_2" + "description_2" guard.
            Compose(
                Shape("Rectangle 25"),
                &[
                    Clause {
                        when: &["success_key_2", "description_2"],
                        parts: &[Val("success_key_1"), Lit("\n"), Val("description_2")],
                    },
                ],
            ),
            Compose(
                Shape("Rectangle 26"),
                &[
                    Clause {
                        when: &["success_key_3", "description_3"],
                        parts: &[Val("success_key_3"), Lit("\n"), Val("description_3")],
                    },
                ],
            ),
            Compose(
                Shape("Rectangle 27"),
                &[
                    Clause {
                        when: &["success_key_4", "description_4"],
                        parts: &[Val("success_key_4"), Lit("\n"), Val("description_4")],
                    },
                ],
            ),
        ],
    },
];
