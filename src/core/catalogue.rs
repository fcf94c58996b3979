//! # Catalogue
//!
//! The fixed set of animal profiles and the async source the TUI loads them from.
//!
//! `CatalogueSource` is the seam for "where animals come from". The only
//! implementation today is `StaticCatalogue`, which serves the built-in
//! records; the trait exists so load failures can be exercised in tests and
//! so the event loop can treat loading like any other background task.

use async_trait::async_trait;
use std::fmt;

use crate::core::animal::{
    AnimalRecord, Behavior, Category, ConservationStatus, Coordinates, Location,
    PhysicalCharacteristics,
};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueError {
    Unavailable(String),
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::Unavailable(reason) => write!(f, "catalogue unavailable: {reason}"),
        }
    }
}

impl std::error::Error for CatalogueError {}

#[async_trait]
pub trait CatalogueSource: Send + Sync {
    fn name(&self) -> &str;

    /// The full ordered collection.
    async fn load(&self) -> Result<Vec<AnimalRecord>, CatalogueError>;

    /// A single record. `Ok(None)` means the id is unknown.
    async fn get(&self, id: &str) -> Result<Option<AnimalRecord>, CatalogueError>;
}

/// Serves the built-in records.
pub struct StaticCatalogue;

#[async_trait]
impl CatalogueSource for StaticCatalogue {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<Vec<AnimalRecord>, CatalogueError> {
        Ok(animals())
    }

    async fn get(&self, id: &str) -> Result<Option<AnimalRecord>, CatalogueError> {
        Ok(animals().into_iter().find(|a| a.id == id))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The seven built-in animal profiles, in display order.
pub fn animals() -> Vec<AnimalRecord> {
    vec![
        AnimalRecord {
            id: "1".into(),
            name: "African Lion".into(),
            title: "King of the Savanna".into(),
            topic: "African Wildlife".into(),
            author: "Wildlife Explorer".into(),
            description: "The African lion, a symbol of power and majesty, rules the savannas of Africa. \
                These social cats live in family groups called prides and are the only felines to have \
                developed a complex social structure."
                .into(),
            image: "images/lion.png".into(),
            category: Category::Mammal,
            habitat: "Savannas, grasslands and open woodlands of sub-Saharan Africa".into(),
            conservation_status: ConservationStatus::Vulnerable,
            facts: strings(&[
                "A lion's roar can be heard up to 8 km away",
                "Lionesses hunt in groups with a coordinated strategy",
                "A male lion can weigh up to 250 kg",
                "Lions sleep up to 20 hours a day",
            ]),
            location: Location {
                continent: "Africa".into(),
                countries: strings(&["Kenya", "Tanzania", "Botswana", "South Africa", "Zambia"]),
                coordinates: Some(Coordinates { lat: -2.0, lng: 37.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "120-250 kg".into(),
                height: "1.2 m at the shoulder".into(),
                length: Some("2.5-3.3 m".into()),
                lifespan: "12-16 years in the wild".into(),
            },
            behavior: Behavior {
                diet: "Carnivore - zebras, wildebeest, buffalo, antelope".into(),
                social_structure: "Prides of 10-15 individuals".into(),
                activity_pattern: "Mostly nocturnal and crepuscular".into(),
            },
            threats: strings(&[
                "Habitat loss from agricultural expansion",
                "Conflict with local communities",
                "Trophy poaching",
                "Declining natural prey",
            ]),
            gallery: strings(&["images/lion.png", "images/lion-2.jpg"]),
        },
        AnimalRecord {
            id: "2".into(),
            name: "African Elephant".into(),
            title: "The Gentle Giant".into(),
            topic: "African Megafauna".into(),
            author: "Conservation Team".into(),
            description: "The African elephant is the largest land mammal. These intelligent, social \
                giants play a crucial role in their ecosystem as a keystone species."
                .into(),
            image: "images/elephant.jpg".into(),
            category: Category::Mammal,
            habitat: "Savannas, forests and deserts of Africa".into(),
            conservation_status: ConservationStatus::Endangered,
            facts: strings(&[
                "Can eat up to 300 kg of vegetation a day",
                "The trunk contains more than 40,000 muscles",
                "Remembers water holes for decades",
                "Communicates with infrasound over long distances",
            ]),
            location: Location {
                continent: "Africa".into(),
                countries: strings(&["Botswana", "Zimbabwe", "Kenya", "Tanzania", "Namibia"]),
                coordinates: Some(Coordinates { lat: -20.0, lng: 25.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "4000-7000 kg".into(),
                height: "3-4 m at the shoulder".into(),
                length: Some("6-7 m".into()),
                lifespan: "60-70 years".into(),
            },
            behavior: Behavior {
                diet: "Herbivore - grasses, fruit, bark, roots".into(),
                social_structure: "Matriarchal family groups led by the oldest female".into(),
                activity_pattern: "Active day and night with rest periods".into(),
            },
            threats: strings(&[
                "Ivory poaching",
                "Habitat fragmentation",
                "Human-elephant conflict",
                "Climate change",
            ]),
            gallery: strings(&["images/elephant.jpg"]),
        },
        AnimalRecord {
            id: "3".into(),
            name: "Bengal Tiger".into(),
            title: "The Solitary Predator".into(),
            topic: "Cats of Asia".into(),
            author: "Big Cat Specialist".into(),
            description: "The Bengal tiger is the largest wild cat and one of the most formidable \
                predators of its range. A solitary, territorial hunter, it has become a symbol of \
                conservation."
                .into(),
            image: "images/tiger.png".into(),
            category: Category::Mammal,
            habitat: "Tropical forests, mangroves and grasslands of South Asia".into(),
            conservation_status: ConservationStatus::Endangered,
            facts: strings(&[
                "Can leap up to 10 metres horizontally",
                "A strong swimmer, unlike most cats",
                "Every tiger has a unique stripe pattern",
                "Can eat up to 25 kg of meat in one sitting",
            ]),
            location: Location {
                continent: "Asia".into(),
                countries: strings(&["India", "Bangladesh", "Nepal", "Bhutan"]),
                coordinates: Some(Coordinates { lat: 23.0, lng: 90.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "140-300 kg".into(),
                height: "0.9-1.1 m at the shoulder".into(),
                length: Some("2.7-3.1 m".into()),
                lifespan: "10-15 years in the wild".into(),
            },
            behavior: Behavior {
                diet: "Carnivore - deer, wild boar, water buffalo".into(),
                social_structure: "Solitary and territorial".into(),
                activity_pattern: "Mostly nocturnal".into(),
            },
            threats: strings(&[
                "Poaching for traditional medicine",
                "Loss of forest habitat",
                "Conflict with humans",
                "Declining prey",
            ]),
            gallery: strings(&["images/tiger.png"]),
        },
        AnimalRecord {
            id: "4".into(),
            name: "Masai Giraffe".into(),
            title: "The Elegant Giant".into(),
            topic: "African Herbivores".into(),
            author: "Savanna Research".into(),
            description: "The Masai giraffe is the tallest land mammal. With its extraordinary neck \
                and unique coat patterns, it embodies the elegance of African wildlife."
                .into(),
            image: "images/giraffe.png".into(),
            category: Category::Mammal,
            habitat: "Savannas and acacia woodlands of East Africa".into(),
            conservation_status: ConservationStatus::Endangered,
            facts: strings(&[
                "Can stand up to 5.5 metres tall",
                "Its heart weighs 11 kg and pumps 60 litres of blood a minute",
                "Its tongue can reach 50 cm",
                "Sleeps only 30 minutes to 2 hours a day",
            ]),
            location: Location {
                continent: "Africa".into(),
                countries: strings(&["Kenya", "Tanzania"]),
                coordinates: Some(Coordinates { lat: -2.5, lng: 36.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "800-1200 kg".into(),
                height: "4.5-5.5 m".into(),
                length: Some("3.8-4.7 m".into()),
                lifespan: "20-25 years".into(),
            },
            behavior: Behavior {
                diet: "Herbivore - mostly acacia leaves".into(),
                social_structure: "Loose groups of 10-20 individuals".into(),
                activity_pattern: "Diurnal with morning and evening peaks".into(),
            },
            threats: strings(&[
                "Habitat loss to agriculture",
                "Territory fragmentation",
                "Poaching for meat and trophies",
                "Conflict with livestock farming",
            ]),
            gallery: strings(&["images/giraffe.png"]),
        },
        AnimalRecord {
            id: "5".into(),
            name: "African Leopard".into(),
            title: "Ghost of the Savanna".into(),
            topic: "African Predators".into(),
            author: "Predator Watch".into(),
            description: "The African leopard is one of the most adaptable and elusive cats. An \
                excellent climber and opportunistic hunter, it survives in a wide range of habitats."
                .into(),
            image: "images/leopard.jpg".into(),
            category: Category::Mammal,
            habitat: "Forests, savannas, mountains and semi-desert areas".into(),
            conservation_status: ConservationStatus::NearThreatened,
            facts: strings(&[
                "Can haul 50 kg of prey into trees",
                "An excellent swimmer and climber",
                "Territories can span 30 km²",
                "Night vision six times better than a human's",
            ]),
            location: Location {
                continent: "Africa".into(),
                countries: strings(&["South Africa", "Botswana", "Kenya", "Tanzania", "Namibia"]),
                coordinates: Some(Coordinates { lat: -15.0, lng: 25.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "30-90 kg".into(),
                height: "0.6-0.7 m at the shoulder".into(),
                length: Some("1.0-1.9 m".into()),
                lifespan: "12-17 years".into(),
            },
            behavior: Behavior {
                diet: "Carnivore - antelope, primates, birds, fish".into(),
                social_structure: "Solitary and territorial".into(),
                activity_pattern: "Mostly nocturnal and crepuscular".into(),
            },
            threats: strings(&[
                "Habitat loss",
                "Conflict with livestock farming",
                "Poaching for fur",
                "Declining prey",
            ]),
            gallery: strings(&["images/leopard.jpg"]),
        },
        AnimalRecord {
            id: "6".into(),
            name: "Cheetah".into(),
            title: "Sprinter of the Savanna".into(),
            topic: "Animal Speed".into(),
            author: "Speed Research".into(),
            description: "The cheetah is the fastest land animal in the world. Specialised in \
                high-speed hunting, it represents evolution pushed to the extreme."
                .into(),
            image: "images/cheetah.png".into(),
            category: Category::Mammal,
            habitat: "Open savannas and semi-deserts of Africa".into(),
            conservation_status: ConservationStatus::Vulnerable,
            facts: strings(&[
                "Reaches 110 km/h in 3 seconds",
                "Non-retractable claws give it better grip",
                "Hunting success rate of 50%",
                "Must rest 30 minutes after each sprint",
            ]),
            location: Location {
                continent: "Africa".into(),
                countries: strings(&["Namibia", "Botswana", "Kenya", "Tanzania"]),
                coordinates: Some(Coordinates { lat: -20.0, lng: 20.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "35-65 kg".into(),
                height: "0.7-0.9 m at the shoulder".into(),
                length: Some("1.1-1.5 m".into()),
                lifespan: "8-12 years".into(),
            },
            behavior: Behavior {
                diet: "Carnivore - gazelles, impalas, hares".into(),
                social_structure: "Solitary females, males in coalitions".into(),
                activity_pattern: "Diurnal to avoid competition".into(),
            },
            threats: strings(&[
                "Habitat loss to agriculture",
                "Conflict with livestock farming",
                "Illegal wildlife trade",
                "Genetic inbreeding",
            ]),
            gallery: strings(&["images/cheetah.png"]),
        },
        AnimalRecord {
            id: "7".into(),
            name: "Eurasian Elk".into(),
            title: "Giant of the Northern Forests".into(),
            topic: "European Wildlife".into(),
            author: "Nordic Wildlife".into(),
            description: "The Eurasian elk is the largest deer in the world. Perfectly adapted to \
                boreal forests, it symbolises the wild nature of the North."
                .into(),
            image: "images/elk.jpg".into(),
            category: Category::Mammal,
            habitat: "Boreal forests and tundra of Northern Europe".into(),
            conservation_status: ConservationStatus::LeastConcern,
            facts: strings(&[
                "Can weigh up to 700 kg",
                "Antlers can span 2 metres",
                "A strong swimmer that can dive up to 6 metres",
                "Runs at 55 km/h despite its size",
            ]),
            location: Location {
                continent: "Europe".into(),
                countries: strings(&["Sweden", "Norway", "Finland", "Russia", "Canada"]),
                coordinates: Some(Coordinates { lat: 65.0, lng: 25.0 }),
            },
            physical: PhysicalCharacteristics {
                weight: "270-700 kg".into(),
                height: "1.4-2.1 m at the shoulder".into(),
                length: Some("2.4-3.2 m".into()),
                lifespan: "15-25 years".into(),
            },
            behavior: Behavior {
                diet: "Herbivore - leaves, shoots, aquatic plants".into(),
                social_structure: "Solitary except during the breeding season".into(),
                activity_pattern: "Crepuscular and nocturnal".into(),
            },
            threats: strings(&[
                "Road collisions",
                "Overhunting in some regions",
                "Climate change affecting habitat",
                "Forest fragmentation",
            ]),
            gallery: strings(&["images/elk.jpg"]),
        },
    ]
}
