//! Shared test fixtures

use crate::domain::entities::{House, Trait};

/// Build a house with the given id, name and trait names
pub fn test_house(id: &str, name: &str, trait_names: &[&str]) -> House {
    let traits = trait_names
        .iter()
        .enumerate()
        .map(|(i, trait_name)| Trait {
            id: format!("{}-t{}", id, i + 1),
            name: trait_name.to_string(),
        })
        .collect();

    House {
        id: id.to_string(),
        name: name.to_string(),
        house_colours: "Scarlet and Gold".to_string(),
        founder: "Unknown".to_string(),
        animal: "Unknown".to_string(),
        traits,
    }
}

/// The four canonical houses in upstream feed order
pub fn test_houses() -> Vec<House> {
    vec![
        House {
            id: "1".to_string(),
            name: "Gryffindor".to_string(),
            house_colours: "Scarlet and Gold".to_string(),
            founder: "Godric Gryffindor".to_string(),
            animal: "Lion".to_string(),
            traits: vec![
                Trait {
                    id: "1-t1".to_string(),
                    name: "Courage".to_string(),
                },
                Trait {
                    id: "1-t2".to_string(),
                    name: "Bravery".to_string(),
                },
            ],
        },
        House {
            id: "2".to_string(),
            name: "Hufflepuff".to_string(),
            house_colours: "Yellow and Black".to_string(),
            founder: "Helga Hufflepuff".to_string(),
            animal: "Badger".to_string(),
            traits: vec![
                Trait {
                    id: "2-t1".to_string(),
                    name: "Loyalty".to_string(),
                },
                Trait {
                    id: "2-t2".to_string(),
                    name: "Patience".to_string(),
                },
            ],
        },
        House {
            id: "3".to_string(),
            name: "Ravenclaw".to_string(),
            house_colours: "Blue and Bronze".to_string(),
            founder: "Rowena Ravenclaw".to_string(),
            animal: "Eagle".to_string(),
            traits: vec![
                Trait {
                    id: "3-t1".to_string(),
                    name: "Wit".to_string(),
                },
                Trait {
                    id: "3-t2".to_string(),
                    name: "Wisdom".to_string(),
                },
            ],
        },
        House {
            id: "4".to_string(),
            name: "Slytherin".to_string(),
            house_colours: "Green and Silver".to_string(),
            founder: "Salazar Slytherin".to_string(),
            animal: "Serpent".to_string(),
            traits: vec![
                Trait {
                    id: "4-t1".to_string(),
                    name: "Ambition".to_string(),
                },
                Trait {
                    id: "4-t2".to_string(),
                    name: "Cunning".to_string(),
                },
            ],
        },
    ]
}
