#![doc = include_str!("../puzzles/03.md")]

use std::fmt;

use advent_of_code_2022::{debugln, Error, Result};
use bitvec::BitArr;

const GROUP_SIZE: usize = 3;

/// One bit per priority. Bit 0 is never set.
type ItemSet = BitArr!(for 64, in u64);

#[derive(Clone, Copy, PartialEq, Eq)]
struct Item {
    priority: u8,
}

impl Item {
    const LOWERCASE_PRIORITY: u8 = 1;
    const UPPERCASE_PRIORITY: u8 = 27;

    pub fn from_char(c: char) -> Option<Self> {
        let priority = match c {
            'a'..='z' => c as u8 - b'a' + Self::LOWERCASE_PRIORITY,
            'A'..='Z' => c as u8 - b'A' + Self::UPPERCASE_PRIORITY,
            _ => return None,
        };
        Some(Self { priority })
    }

    fn from_priority(priority: usize) -> Self {
        Self {
            priority: priority as u8,
        }
    }

    #[inline]
    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn character(&self) -> char {
        if self.priority < Self::UPPERCASE_PRIORITY {
            (b'a' + (self.priority - Self::LOWERCASE_PRIORITY)) as char
        } else {
            (b'A' + (self.priority - Self::UPPERCASE_PRIORITY)) as char
        }
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item('{}' ({}))", self.character(), self.priority)
    }
}

/// The item kinds in one rucksack or compartment.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Inventory {
    items: ItemSet,
}

impl Inventory {
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut set = ItemSet::ZERO;
        for item in items {
            set.set(item.priority() as usize, true);
        }
        Self { items: set }
    }

    /// The lowest-priority item that is in every one of `inventories`.
    pub fn common_item(inventories: &[Inventory]) -> Option<Item> {
        let (first, rest) = inventories.split_first()?;
        first
            .items
            .iter_ones()
            .find(|&priority| rest.iter().all(|other| other.items[priority]))
            .map(Item::from_priority)
    }
}

/// A validated line of input.
#[derive(Debug, Clone)]
struct Rucksack {
    items: Vec<Item>,
}

impl Rucksack {
    pub fn parse(index: usize, line: &str) -> Result<Self> {
        let items = line
            .chars()
            .map(|c| {
                Item::from_char(c)
                    .ok_or_else(|| Error::parse(index, format!("{c:?} is not an item")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn compartments(&self) -> Option<[Inventory; 2]> {
        if self.items.len() % 2 != 0 {
            return None;
        }
        let (left, right) = self.items.split_at(self.items.len() / 2);
        Some([
            Inventory::from_items(left.iter().copied()),
            Inventory::from_items(right.iter().copied()),
        ])
    }

    pub fn inventory(&self) -> Inventory {
        Inventory::from_items(self.items.iter().copied())
    }
}

fn rucksacks(input: &str) -> impl Iterator<Item = (usize, Result<Rucksack>)> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index, Rucksack::parse(index, line)))
}

pub fn part_one(input: &str) -> Result<u32> {
    let mut sum = 0;
    for (index, rucksack) in rucksacks(input) {
        let compartments = rucksack?
            .compartments()
            .ok_or_else(|| Error::parse(index, "odd number of items"))?;
        let item = Inventory::common_item(&compartments)
            .ok_or_else(|| Error::parse(index, "no item in both compartments"))?;
        debugln!("line {}: {item:?}", index + 1);
        sum += item.priority() as u32;
    }
    Ok(sum)
}

pub fn part_two(input: &str) -> Result<u32> {
    let rucksacks = rucksacks(input)
        .map(|(index, rucksack)| rucksack.map(|r| (index, r.inventory())))
        .collect::<Result<Vec<_>>>()?;

    let mut sum = 0;
    for group in rucksacks.chunks(GROUP_SIZE) {
        let (first_index, _) = group[0];
        if group.len() != GROUP_SIZE {
            return Err(Error::parse(first_index, "incomplete group of rucksacks"));
        }
        let inventories: Vec<Inventory> = group.iter().map(|&(_, inv)| inv).collect();
        let badge = Inventory::common_item(&inventories)
            .ok_or_else(|| Error::parse(first_index, "group has no common badge"))?;
        debugln!("group at line {}: {badge:?}", first_index + 1);
        sum += badge.priority() as u32;
    }
    Ok(sum)
}

fn main() {
    let input = &advent_of_code_2022::read_input(3);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}
