use bitfield_struct::*;

/// IVs, egg flag and ability slot, packed into 32 bits
#[bitfield(u32)]
pub struct Genes {
    #[bits(5)]
    pub hp: u8,
    #[bits(5)]
    pub attack: u8,
    #[bits(5)]
    pub defense: u8,
    #[bits(5)]
    pub speed: u8,
    #[bits(5)]
    pub sp_attack: u8,
    #[bits(5)]
    pub sp_defense: u8,

    #[bits(1)]
    pub egg: bool,
    /// Set for the second ability
    #[bits(1)]
    pub ability: bool,
}

impl Genes {
    pub fn ivs(&self) -> [u8; 6] {
        [
            self.hp(),
            self.attack(),
            self.defense(),
            self.speed(),
            self.sp_attack(),
            self.sp_defense(),
        ]
    }

    /// Values must already be known to fit in 5 bits
    pub fn with_ivs(self, ivs: [u8; 6]) -> Genes {
        self.with_hp(ivs[0])
            .with_attack(ivs[1])
            .with_defense(ivs[2])
            .with_speed(ivs[3])
            .with_sp_attack(ivs[4])
            .with_sp_defense(ivs[5])
    }
}

/// Where and how the creature was obtained
#[bitfield(u16)]
pub struct Origins {
    #[bits(7)]
    pub met_level: u8,
    #[bits(4)]
    pub game: u8,
    #[bits(4)]
    pub ball: u8,
    #[bits(1)]
    pub trainer_female: bool,
}

#[bitfield(u8)]
pub struct Pokerus {
    #[bits(4)]
    pub days_left: u8,
    #[bits(4)]
    pub strain: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn egg_and_ability_are_the_top_bits() {
        assert_eq!(u32::from(Genes::new().with_egg(true)), 1 << 30);
        assert_eq!(u32::from(Genes::new().with_ability(true)), 1 << 31);
    }

    #[test]
    fn ivs_are_packed_from_bit_zero() {
        let genes = Genes::new().with_ivs([1, 2, 3, 4, 5, 31]);
        let raw = u32::from(genes);

        assert_eq!(raw & 0x1F, 1);
        assert_eq!((raw >> 5) & 0x1F, 2);
        assert_eq!((raw >> 25) & 0x1F, 31);
        assert_eq!(Genes::from(raw).ivs(), [1, 2, 3, 4, 5, 31]);
    }

    #[test]
    fn origins_layout() {
        let origins = Origins::from(0x8000 | (4 << 11) | (3 << 7) | 5);
        assert!(origins.trainer_female());
        assert_eq!(origins.ball(), 4);
        assert_eq!(origins.game(), 3);
        assert_eq!(origins.met_level(), 5);
    }

    #[test]
    fn pokerus_nibbles() {
        let pokerus = Pokerus::from(0x31);
        assert_eq!(pokerus.strain(), 3);
        assert_eq!(pokerus.days_left(), 1);
    }
}
