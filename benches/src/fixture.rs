use rand::Rng;

#[derive(serde::Serialize)]
pub struct Registry {
    pub region: String,
    pub profiles: Vec<Profile>,
}

#[derive(serde::Serialize)]
pub struct Profile {
    pub name: String,
    pub id: i64,
    pub verbose: bool,
    #[serde(with = "serde_bytes")]
    pub avatar_hash: Vec<u8>,
    pub tags: Vec<String>,
}

pub fn random(n: usize) -> Registry {
    let mut rng = rand::thread_rng();
    let region = (0..20).map(|_| rng.gen_range('a'..='z')).collect();
    let profiles = (0..n)
        .map(|_| Profile {
            name: (0..20).map(|_| rng.gen_range('a'..='z')).collect(),
            id: rng.gen(),
            verbose: rng.gen_ratio(1, 4),
            avatar_hash: (0..16).map(|_| rng.gen()).collect(),
            tags: (0..rng.gen_range(0..4))
                .map(|_| (0..8).map(|_| rng.gen_range('a'..='z')).collect())
                .collect(),
        })
        .collect();
    Registry { region, profiles }
}

