//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builders for: Address, Person, Sample, Account
//! Source: fixtures/person.json
//! Generated by `datatype-gen`
#![allow(clippy::ptr_arg, dead_code)]

use datatype_gen_support::{SetMultimap, SortedSet};
/// A postal address.
#[derive(Debug, Clone)]
pub struct Address {
    street: String,
    zip: Option<String>,
}
impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::new()
    }
    pub fn street(&self) -> &String {
        &self.street
    }
    pub fn zip(&self) -> Option<&String> {
        self.zip.as_ref()
    }
    /// A builder holding a copy of every field of this value.
    pub fn to_builder(&self) -> AddressBuilder {
        let mut builder = AddressBuilder::new();
        builder.street = self.street.clone();
        builder.zip = self.zip.clone();
        builder
    }
}
/// Builder for [`Address`].
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    street: String,
    zip: Option<String>,
    unset: datatype_gen_support::UnsetFields<0>,
}
impl AddressBuilder {
    const REQUIRED_FIELDS: [&'static str; 0] = [];
    pub fn new() -> Self {
        Self {
            street: String::new(),
            zip: None,
            unset: datatype_gen_support::UnsetFields::all(),
        }
    }
    pub fn set_street(&mut self, street: impl Into<String>) -> &mut Self {
        let street: String = street.into();
        self.street = street;
        self
    }
    pub fn map_street<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnOnce(String) -> String,
    {
        let current = self.street.clone();
        self.set_street(mapper(current))
    }
    pub fn street(&self) -> &String {
        &self.street
    }
    pub fn set_zip(&mut self, zip: impl Into<String>) -> &mut Self {
        let zip: String = zip.into();
        self.zip = Some(zip);
        self
    }
    pub fn set_nullable_zip(&mut self, zip: Option<String>) -> &mut Self {
        match zip {
            Some(zip) => self.set_zip(zip),
            None => self.clear_zip(),
        }
    }
    pub fn map_zip<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnOnce(String) -> String,
    {
        match self.zip.clone() {
            Some(current) => self.set_zip(mapper(current)),
            None => self,
        }
    }
    pub fn clear_zip(&mut self) -> &mut Self {
        self.zip = None;
        self
    }
    pub fn zip(&self) -> Option<&String> {
        self.zip.as_ref()
    }
    /// Fails with `MissingFields` naming every required field that was never set.
    pub fn build(&self) -> Result<Address, datatype_gen_support::BuildError> {
        self.unset.check_complete("Address", &Self::REQUIRED_FIELDS)?;
        Ok(Address {
            street: self.street.clone(),
            zip: self.zip.clone(),
        })
    }
    /// Snapshots the builder without checking required fields. Reading an unset field of the
    /// result fails instead.
    pub fn build_partial(&self) -> PartialAddress {
        PartialAddress {
            street: self.street.clone(),
            zip: self.zip.clone(),
            unset: self.unset,
        }
    }
    /// Resets every field to its initial state. Sorted-set comparators are kept.
    pub fn clear(&mut self) -> &mut Self {
        let template = Self::new();
        self.street = template.street;
        self.zip = template.zip;
        self.unset = template.unset;
        self
    }
    /// Copies every field of `value` that differs from its initial state; collections are appended to.
    pub fn merge_from(&mut self, value: &Address) -> &mut Self {
        let template = Self::new();
        if value.street != template.street {
            self.set_street(value.street.clone());
        }
        if let Some(current) = &value.zip {
            self.set_zip(current.clone());
        }
        self
    }
    /// Copies every field set on `other`; collections are appended to.
    pub fn merge_from_builder(&mut self, other: &Self) -> &mut Self {
        let template = Self::new();
        if other.street != template.street {
            self.set_street(other.street.clone());
        }
        if let Some(current) = &other.zip {
            self.set_zip(current.clone());
        }
        self
    }
}
impl Default for AddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}
/// A [`Address`] that may be missing required fields, for use in tests. Reading a missing field fails.
#[derive(Debug, Clone)]
pub struct PartialAddress {
    street: String,
    zip: Option<String>,
    unset: datatype_gen_support::UnsetFields<0>,
}
impl PartialAddress {
    pub fn street(&self) -> &String {
        &self.street
    }
    pub fn zip(&self) -> Option<&String> {
        self.zip.as_ref()
    }
}
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street && self.zip == other.zip
    }
}
impl PartialEq for PartialAddress {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street && self.zip == other.zip && self.unset == other.unset
    }
}
impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!("street={:?}", self.street));
        if let Some(current) = &self.zip {
            parts.push(format!("zip={:?}", current));
        }
        write!(f, "Address{{{}}}", parts.join(", "))
    }
}
impl std::fmt::Display for PartialAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!("street={:?}", self.street));
        if let Some(current) = &self.zip {
            parts.push(format!("zip={:?}", current));
        }
        write!(f, "partial Address{{{}}}", parts.join(", "))
    }
}
/// A person with every field category the generator supports.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    age: i32,
    nickname: Option<String>,
    items: Vec<String>,
    tags: SetMultimap<String, String>,
    scores: SortedSet<i32>,
    address: Address,
}
impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::new()
    }
    /// The person's full name.
    pub fn name(&self) -> &String {
        &self.name
    }
    pub fn age(&self) -> i32 {
        self.age
    }
    pub fn nickname(&self) -> Option<&String> {
        self.nickname.as_ref()
    }
    pub fn items(&self) -> &[String] {
        &self.items
    }
    pub fn tags(&self) -> &SetMultimap<String, String> {
        &self.tags
    }
    pub fn scores(&self) -> &SortedSet<i32> {
        &self.scores
    }
    pub fn address(&self) -> &Address {
        &self.address
    }
    /// A builder holding a copy of every field of this value.
    pub fn to_builder(&self) -> PersonBuilder {
        let mut builder = PersonBuilder::new();
        builder.name = Some(self.name.clone());
        builder.unset.remove(0);
        builder.age = self.age;
        builder.nickname = self.nickname.clone();
        builder.items = self.items.clone();
        builder.tags = self.tags.clone();
        builder.scores = Some(
            datatype_gen_support::SortedSetBuffer::shared(&self.scores),
        );
        builder.address = self.address.to_builder();
        builder
    }
}
/// Builder for [`Person`].
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: Option<String>,
    age: i32,
    nickname: Option<String>,
    items: Vec<String>,
    tags: SetMultimap<String, String>,
    scores: Option<datatype_gen_support::SortedSetBuffer<i32>>,
    address: AddressBuilder,
    unset: datatype_gen_support::UnsetFields<1>,
}
impl PersonBuilder {
    const REQUIRED_FIELDS: [&'static str; 1] = ["name"];
    pub fn new() -> Self {
        Self {
            name: None,
            age: 0,
            nickname: None,
            items: Vec::new(),
            tags: Default::default(),
            scores: None,
            address: AddressBuilder::new(),
            unset: datatype_gen_support::UnsetFields::all(),
        }
    }
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name: String = name.into();
        self.name = Some(name);
        self.unset.remove(0);
        self
    }
    pub fn map_name<F>(
        &mut self,
        mapper: F,
    ) -> Result<&mut Self, datatype_gen_support::BuildError>
    where
        F: FnOnce(String) -> String,
    {
        let current = self.name()?.clone();
        Ok(self.set_name(mapper(current)))
    }
    /// The person's full name.
    pub fn name(&self) -> Result<&String, datatype_gen_support::BuildError> {
        self.unset.check_set(0, "name")?;
        self.name
            .as_ref()
            .ok_or_else(|| datatype_gen_support::BuildError::not_set("name"))
    }
    pub fn set_age(&mut self, age: i32) -> &mut Self {
        self.age = age;
        self
    }
    pub fn map_age<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnOnce(i32) -> i32,
    {
        let current = self.age;
        self.set_age(mapper(current))
    }
    pub fn age(&self) -> i32 {
        self.age
    }
    #[doc(alias = "nickName")]
    pub fn set_nickname(&mut self, nickname: impl Into<String>) -> &mut Self {
        let nickname: String = nickname.into();
        self.nickname = Some(nickname);
        self
    }
    pub fn set_nullable_nickname(&mut self, nickname: Option<String>) -> &mut Self {
        match nickname {
            Some(nickname) => self.set_nickname(nickname),
            None => self.clear_nickname(),
        }
    }
    pub fn map_nickname<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnOnce(String) -> String,
    {
        match self.nickname.clone() {
            Some(current) => self.set_nickname(mapper(current)),
            None => self,
        }
    }
    pub fn clear_nickname(&mut self) -> &mut Self {
        self.nickname = None;
        self
    }
    pub fn nickname(&self) -> Option<&String> {
        self.nickname.as_ref()
    }
    pub fn add_items(&mut self, element: impl Into<String>) -> &mut Self {
        let element: String = element.into();
        self.items.push(element);
        self
    }
    pub fn add_all_items<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for element in elements {
            self.add_items(element);
        }
        self
    }
    pub fn remove_items(&mut self, element: &String) -> &mut Self {
        if let Some(index) = self.items.iter().position(|current| current == element) {
            self.items.remove(index);
        }
        self
    }
    pub fn mutate_items<F>(&mut self, mutator: F) -> &mut Self
    where
        F: FnOnce(&mut Vec<String>),
    {
        mutator(&mut self.items);
        self
    }
    pub fn clear_items(&mut self) -> &mut Self {
        self.items.clear();
        self
    }
    pub fn items(&self) -> &[String] {
        &self.items
    }
    pub fn put_tags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let key: String = key.into();
        let value: String = value.into();
        self.tags.put(key, value);
        self
    }
    pub fn put_all_tags<I>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let key: String = key.into();
        for value in values {
            self.put_tags(key.clone(), value);
        }
        self
    }
    pub fn put_all_tags_from(
        &mut self,
        multimap: &SetMultimap<String, String>,
    ) -> &mut Self {
        for (key, value) in multimap.iter() {
            self.put_tags(key.clone(), value.clone());
        }
        self
    }
    pub fn remove_tags(&mut self, key: &String, value: &String) -> &mut Self {
        self.tags.remove(key, value);
        self
    }
    pub fn remove_all_tags(&mut self, key: &String) -> &mut Self {
        self.tags.remove_all(key);
        self
    }
    pub fn mutate_tags<F>(&mut self, mutator: F) -> &mut Self
    where
        F: FnOnce(&mut SetMultimap<String, String>),
    {
        mutator(&mut self.tags);
        self
    }
    pub fn clear_tags(&mut self) -> &mut Self {
        self.tags.clear();
        self
    }
    pub fn tags(&self) -> &SetMultimap<String, String> {
        &self.tags
    }
    pub fn set_scores_comparator(
        &mut self,
        comparator: datatype_gen_support::Comparator<i32>,
    ) -> Result<&mut Self, datatype_gen_support::BuildError> {
        if self.scores.is_some() {
            return Err(
                datatype_gen_support::BuildError::comparator_already_set("scores"),
            );
        }
        self.scores = Some(
            datatype_gen_support::SortedSetBuffer::with_comparator(comparator),
        );
        Ok(self)
    }
    pub fn add_scores(&mut self, element: i32) -> &mut Self {
        self.scores_buffer().insert(element);
        self
    }
    pub fn add_all_scores<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<i32>,
    {
        for element in elements {
            self.add_scores(element.into());
        }
        self
    }
    pub fn remove_scores(&mut self, element: &i32) -> &mut Self {
        self.scores_buffer().remove(element);
        self
    }
    pub fn mutate_scores<F>(&mut self, mutator: F) -> &mut Self
    where
        F: FnOnce(&mut datatype_gen_support::SortedSetBuffer<i32>),
    {
        mutator(self.scores_buffer());
        self
    }
    pub fn clear_scores(&mut self) -> &mut Self {
        if let Some(buffer) = &mut self.scores {
            buffer.clear();
        }
        self
    }
    pub fn scores(&mut self) -> &[i32] {
        self.scores_buffer().as_slice()
    }
    fn scores_buffer(&mut self) -> &mut datatype_gen_support::SortedSetBuffer<i32> {
        self.scores.get_or_insert_with(datatype_gen_support::SortedSetBuffer::natural)
    }
    pub fn set_address(&mut self, address: impl Into<Address>) -> &mut Self {
        let address: Address = address.into();
        self.address = address.to_builder();
        self
    }
    pub fn set_address_builder(&mut self, builder: AddressBuilder) -> &mut Self {
        self.address = builder;
        self
    }
    pub fn mutate_address<F>(&mut self, mutator: F) -> &mut Self
    where
        F: FnOnce(&mut AddressBuilder),
    {
        mutator(&mut self.address);
        self
    }
    pub fn address(&self) -> &AddressBuilder {
        &self.address
    }
    pub fn address_mut(&mut self) -> &mut AddressBuilder {
        &mut self.address
    }
    /// Fails with `MissingFields` naming every required field that was never set.
    pub fn build(&self) -> Result<Person, datatype_gen_support::BuildError> {
        self.unset.check_complete("Person", &Self::REQUIRED_FIELDS)?;
        Ok(Person {
            name: self
                .name
                .clone()
                .ok_or_else(|| datatype_gen_support::BuildError::not_set("name"))?,
            age: self.age,
            nickname: self.nickname.clone(),
            items: self.items.clone(),
            tags: self.tags.clone(),
            scores: self
                .scores
                .as_ref()
                .map_or_else(
                    datatype_gen_support::SortedSet::new,
                    datatype_gen_support::SortedSetBuffer::freeze,
                ),
            address: self.address.build()?,
        })
    }
    /// Snapshots the builder without checking required fields. Reading an unset field of the
    /// result fails instead.
    pub fn build_partial(&self) -> PartialPerson {
        PartialPerson {
            name: self.name.clone(),
            age: self.age,
            nickname: self.nickname.clone(),
            items: self.items.clone(),
            tags: self.tags.clone(),
            scores: self
                .scores
                .as_ref()
                .map_or_else(
                    datatype_gen_support::SortedSet::new,
                    datatype_gen_support::SortedSetBuffer::freeze,
                ),
            address: self.address.build_partial(),
            unset: self.unset,
        }
    }
    /// Resets every field to its initial state. Sorted-set comparators are kept.
    pub fn clear(&mut self) -> &mut Self {
        let template = Self::new();
        self.name = template.name;
        self.age = template.age;
        self.nickname = template.nickname;
        self.items.clear();
        self.tags.clear();
        if let Some(buffer) = &mut self.scores {
            buffer.clear();
        }
        self.address.clear();
        self.unset = template.unset;
        self
    }
    /// Copies every field of `value` that differs from its initial state; collections are appended to.
    pub fn merge_from(&mut self, value: &Person) -> &mut Self {
        let template = Self::new();
        self.set_name(value.name.clone());
        if value.age != template.age {
            self.set_age(value.age);
        }
        if let Some(current) = &value.nickname {
            self.set_nickname(current.clone());
        }
        self.add_all_items(value.items.iter().cloned());
        self.put_all_tags_from(&value.tags);
        if !datatype_gen_support::SortedSetBuffer::try_share(
            &mut self.scores,
            &value.scores,
        ) {
            self.add_all_scores(value.scores.iter().cloned());
        }
        self.address.merge_from(&value.address);
        self
    }
    /// Copies every field set on `other`; collections are appended to.
    pub fn merge_from_builder(&mut self, other: &Self) -> &mut Self {
        let template = Self::new();
        if let Ok(current) = other.name() {
            self.set_name(current.clone());
        }
        if other.age != template.age {
            self.set_age(other.age);
        }
        if let Some(current) = &other.nickname {
            self.set_nickname(current.clone());
        }
        self.add_all_items(other.items.iter().cloned());
        self.put_all_tags_from(&other.tags);
        if let Some(buffer) = &other.scores {
            self.add_all_scores(buffer.iter().cloned());
        }
        self.address.merge_from_builder(&other.address);
        self
    }
}
impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
/// A [`Person`] that may be missing required fields, for use in tests. Reading a missing field fails.
#[derive(Debug, Clone)]
pub struct PartialPerson {
    name: Option<String>,
    age: i32,
    nickname: Option<String>,
    items: Vec<String>,
    tags: SetMultimap<String, String>,
    scores: SortedSet<i32>,
    address: PartialAddress,
    unset: datatype_gen_support::UnsetFields<1>,
}
impl PartialPerson {
    /// The person's full name.
    pub fn name(&self) -> Result<&String, datatype_gen_support::BuildError> {
        self.unset.check_partial(0, "name")?;
        self.name
            .as_ref()
            .ok_or_else(|| datatype_gen_support::BuildError::partial_unset("name"))
    }
    pub fn age(&self) -> i32 {
        self.age
    }
    pub fn nickname(&self) -> Option<&String> {
        self.nickname.as_ref()
    }
    pub fn items(&self) -> &[String] {
        &self.items
    }
    pub fn tags(&self) -> &SetMultimap<String, String> {
        &self.tags
    }
    pub fn scores(&self) -> &SortedSet<i32> {
        &self.scores
    }
    pub fn address(&self) -> &PartialAddress {
        &self.address
    }
}
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age
            && self.nickname == other.nickname && self.items == other.items
            && self.tags == other.tags && self.scores == other.scores
            && self.address == other.address
    }
}
impl PartialEq for PartialPerson {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age
            && self.nickname == other.nickname && self.items == other.items
            && self.tags == other.tags && self.scores == other.scores
            && self.address == other.address && self.unset == other.unset
    }
}
impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!("name={:?}", self.name));
        parts.push(format!("age={:?}", self.age));
        if let Some(current) = &self.nickname {
            parts.push(format!("nickname={:?}", current));
        }
        parts.push(format!("items={:?}", self.items));
        parts.push(format!("tags={:?}", self.tags));
        parts.push(format!("scores={:?}", self.scores));
        parts.push(format!("address={}", self.address));
        write!(f, "Person{{{}}}", parts.join(", "))
    }
}
impl std::fmt::Display for PartialPerson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(current) = &self.name {
            parts.push(format!("name={:?}", current));
        }
        parts.push(format!("age={:?}", self.age));
        if let Some(current) = &self.nickname {
            parts.push(format!("nickname={:?}", current));
        }
        parts.push(format!("items={:?}", self.items));
        parts.push(format!("tags={:?}", self.tags));
        parts.push(format!("scores={:?}", self.scores));
        parts.push(format!("address={}", self.address));
        write!(f, "partial Person{{{}}}", parts.join(", "))
    }
}
/// A measurement whose mean may be missing.
#[derive(Debug, Clone)]
pub struct Sample {
    mean: Option<f64>,
    raw: f64,
}
impl Sample {
    pub fn builder() -> SampleBuilder {
        SampleBuilder::new()
    }
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }
    pub fn raw(&self) -> f64 {
        self.raw
    }
    /// A builder holding a copy of every field of this value.
    pub fn to_builder(&self) -> SampleBuilder {
        let mut builder = SampleBuilder::new();
        builder.mean = self.mean.clone();
        builder.raw = self.raw;
        builder
    }
}
/// Builder for [`Sample`].
#[derive(Debug, Clone)]
pub struct SampleBuilder {
    mean: Option<f64>,
    raw: f64,
    unset: datatype_gen_support::UnsetFields<0>,
}
impl SampleBuilder {
    const REQUIRED_FIELDS: [&'static str; 0] = [];
    pub fn new() -> Self {
        Self {
            mean: None,
            raw: 0.0,
            unset: datatype_gen_support::UnsetFields::all(),
        }
    }
    pub fn set_mean(&mut self, mean: f64) -> &mut Self {
        self.mean = Some(mean);
        self
    }
    pub fn set_nullable_mean(&mut self, mean: Option<f64>) -> &mut Self {
        match mean {
            Some(mean) => self.set_mean(mean),
            None => self.clear_mean(),
        }
    }
    pub fn map_mean<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnOnce(f64) -> f64,
    {
        match self.mean {
            Some(current) => self.set_mean(mapper(current)),
            None => self,
        }
    }
    pub fn clear_mean(&mut self) -> &mut Self {
        self.mean = None;
        self
    }
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }
    pub fn set_raw(&mut self, raw: f64) -> &mut Self {
        self.raw = raw;
        self
    }
    pub fn map_raw<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnOnce(f64) -> f64,
    {
        let current = self.raw;
        self.set_raw(mapper(current))
    }
    pub fn raw(&self) -> f64 {
        self.raw
    }
    /// Fails with `MissingFields` naming every required field that was never set.
    pub fn build(&self) -> Result<Sample, datatype_gen_support::BuildError> {
        self.unset.check_complete("Sample", &Self::REQUIRED_FIELDS)?;
        Ok(Sample {
            mean: self.mean.clone(),
            raw: self.raw,
        })
    }
    /// Snapshots the builder without checking required fields. Reading an unset field of the
    /// result fails instead.
    pub fn build_partial(&self) -> PartialSample {
        PartialSample {
            mean: self.mean.clone(),
            raw: self.raw,
            unset: self.unset,
        }
    }
    /// Resets every field to its initial state. Sorted-set comparators are kept.
    pub fn clear(&mut self) -> &mut Self {
        let template = Self::new();
        self.mean = template.mean;
        self.raw = template.raw;
        self.unset = template.unset;
        self
    }
    /// Copies every field of `value` that differs from its initial state; collections are appended to.
    pub fn merge_from(&mut self, value: &Sample) -> &mut Self {
        let template = Self::new();
        if let Some(current) = &value.mean {
            self.set_mean(*current);
        }
        if value.raw.to_bits() != template.raw.to_bits() {
            self.set_raw(value.raw);
        }
        self
    }
    /// Copies every field set on `other`; collections are appended to.
    pub fn merge_from_builder(&mut self, other: &Self) -> &mut Self {
        let template = Self::new();
        if let Some(current) = &other.mean {
            self.set_mean(*current);
        }
        if other.raw.to_bits() != template.raw.to_bits() {
            self.set_raw(other.raw);
        }
        self
    }
}
impl Default for SampleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
/// A [`Sample`] that may be missing required fields, for use in tests. Reading a missing field fails.
#[derive(Debug, Clone)]
pub struct PartialSample {
    mean: Option<f64>,
    raw: f64,
    unset: datatype_gen_support::UnsetFields<0>,
}
impl PartialSample {
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }
    pub fn raw(&self) -> f64 {
        self.raw
    }
}
impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.mean.map(f64::to_bits) == other.mean.map(f64::to_bits)
            && self.raw.to_bits() == other.raw.to_bits()
    }
}
impl PartialEq for PartialSample {
    fn eq(&self, other: &Self) -> bool {
        self.mean.map(f64::to_bits) == other.mean.map(f64::to_bits)
            && self.raw.to_bits() == other.raw.to_bits() && self.unset == other.unset
    }
}
impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(current) = &self.mean {
            parts.push(format!("mean={:?}", current));
        }
        parts.push(format!("raw={:?}", self.raw));
        write!(f, "Sample{{{}}}", parts.join(", "))
    }
}
impl std::fmt::Display for PartialSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(current) = &self.mean {
            parts.push(format!("mean={:?}", current));
        }
        parts.push(format!("raw={:?}", self.raw));
        write!(f, "partial Sample{{{}}}", parts.join(", "))
    }
}
/// An account whose mutations run user validators.
#[derive(Debug, Clone)]
pub struct Account {
    email: String,
    roles: Vec<String>,
    levels: SortedSet<u8>,
}
impl Account {
    pub fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }
    pub fn email(&self) -> &String {
        &self.email
    }
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
    pub fn levels(&self) -> &SortedSet<u8> {
        &self.levels
    }
    /// A builder holding a copy of every field of this value.
    pub fn to_builder(&self) -> AccountBuilder {
        let mut builder = AccountBuilder::new();
        builder.email = Some(self.email.clone());
        builder.unset.remove(0);
        builder.roles = self.roles.clone();
        builder.levels = Some(
            datatype_gen_support::SortedSetBuffer::shared(&self.levels),
        );
        builder
    }
}
/// Builder for [`Account`].
#[derive(Debug, Clone)]
pub struct AccountBuilder {
    email: Option<String>,
    roles: Vec<String>,
    levels: Option<datatype_gen_support::SortedSetBuffer<u8>>,
    unset: datatype_gen_support::UnsetFields<1>,
}
impl AccountBuilder {
    const REQUIRED_FIELDS: [&'static str; 1] = ["email"];
    pub fn new() -> Self {
        Self {
            email: None,
            roles: Vec::new(),
            levels: None,
            unset: datatype_gen_support::UnsetFields::all(),
        }
    }
    pub fn set_email(
        &mut self,
        email: impl Into<String>,
    ) -> Result<&mut Self, crate::AccountError> {
        let email: String = email.into();
        crate::check_email(&email)?;
        self.email = Some(email);
        self.unset.remove(0);
        Ok(self)
    }
    pub fn map_email<F>(&mut self, mapper: F) -> Result<&mut Self, crate::AccountError>
    where
        F: FnOnce(String) -> String,
    {
        let current = self.email()?.clone();
        self.set_email(mapper(current))
    }
    pub fn email(&self) -> Result<&String, datatype_gen_support::BuildError> {
        self.unset.check_set(0, "email")?;
        self.email
            .as_ref()
            .ok_or_else(|| datatype_gen_support::BuildError::not_set("email"))
    }
    pub fn add_roles(
        &mut self,
        element: impl Into<String>,
    ) -> Result<&mut Self, crate::AccountError> {
        let element: String = element.into();
        crate::check_role(&element)?;
        self.roles.push(element);
        Ok(self)
    }
    pub fn add_all_roles<I>(
        &mut self,
        elements: I,
    ) -> Result<&mut Self, crate::AccountError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for element in elements {
            self.add_roles(element)?;
        }
        Ok(self)
    }
    pub fn remove_roles(&mut self, element: &String) -> &mut Self {
        if let Some(index) = self.roles.iter().position(|current| current == element) {
            self.roles.remove(index);
        }
        self
    }
    pub fn mutate_roles<F>(
        &mut self,
        mutator: F,
    ) -> Result<&mut Self, crate::AccountError>
    where
        F: FnOnce(&mut Vec<String>),
    {
        let mut elements = self.roles.clone();
        mutator(&mut elements);
        for element in &elements {
            crate::check_role(element)?;
        }
        self.roles = elements;
        Ok(self)
    }
    pub fn clear_roles(&mut self) -> &mut Self {
        self.roles.clear();
        self
    }
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
    pub fn set_levels_comparator(
        &mut self,
        comparator: datatype_gen_support::Comparator<u8>,
    ) -> Result<&mut Self, datatype_gen_support::BuildError> {
        if self.levels.is_some() {
            return Err(
                datatype_gen_support::BuildError::comparator_already_set("levels"),
            );
        }
        self.levels = Some(
            datatype_gen_support::SortedSetBuffer::with_comparator(comparator),
        );
        Ok(self)
    }
    pub fn add_levels(&mut self, element: u8) -> Result<&mut Self, crate::AccountError> {
        crate::check_level(&element)?;
        self.levels_buffer().insert(element);
        Ok(self)
    }
    pub fn add_all_levels<I>(
        &mut self,
        elements: I,
    ) -> Result<&mut Self, crate::AccountError>
    where
        I: IntoIterator,
        I::Item: Into<u8>,
    {
        for element in elements {
            self.add_levels(element.into())?;
        }
        Ok(self)
    }
    pub fn remove_levels(&mut self, element: &u8) -> &mut Self {
        self.levels_buffer().remove(element);
        self
    }
    pub fn mutate_levels<F>(
        &mut self,
        mutator: F,
    ) -> Result<&mut Self, crate::AccountError>
    where
        F: FnOnce(&mut datatype_gen_support::SortedSetBuffer<u8>),
    {
        let mut buffer = self.levels_buffer().clone();
        mutator(&mut buffer);
        for element in &buffer {
            crate::check_level(element)?;
        }
        self.levels = Some(buffer);
        Ok(self)
    }
    pub fn clear_levels(&mut self) -> &mut Self {
        if let Some(buffer) = &mut self.levels {
            buffer.clear();
        }
        self
    }
    pub fn levels(&mut self) -> &[u8] {
        self.levels_buffer().as_slice()
    }
    fn levels_buffer(&mut self) -> &mut datatype_gen_support::SortedSetBuffer<u8> {
        self.levels.get_or_insert_with(datatype_gen_support::SortedSetBuffer::natural)
    }
    /// Fails with `MissingFields` naming every required field that was never set.
    pub fn build(&self) -> Result<Account, datatype_gen_support::BuildError> {
        self.unset.check_complete("Account", &Self::REQUIRED_FIELDS)?;
        Ok(Account {
            email: self
                .email
                .clone()
                .ok_or_else(|| datatype_gen_support::BuildError::not_set("email"))?,
            roles: self.roles.clone(),
            levels: self
                .levels
                .as_ref()
                .map_or_else(
                    datatype_gen_support::SortedSet::new,
                    datatype_gen_support::SortedSetBuffer::freeze,
                ),
        })
    }
    /// Snapshots the builder without checking required fields. Reading an unset field of the
    /// result fails instead.
    pub fn build_partial(&self) -> PartialAccount {
        PartialAccount {
            email: self.email.clone(),
            roles: self.roles.clone(),
            levels: self
                .levels
                .as_ref()
                .map_or_else(
                    datatype_gen_support::SortedSet::new,
                    datatype_gen_support::SortedSetBuffer::freeze,
                ),
            unset: self.unset,
        }
    }
    /// Resets every field to its initial state. Sorted-set comparators are kept.
    pub fn clear(&mut self) -> &mut Self {
        let template = Self::new();
        self.email = template.email;
        self.roles.clear();
        if let Some(buffer) = &mut self.levels {
            buffer.clear();
        }
        self.unset = template.unset;
        self
    }
    /// Copies every field of `value` that differs from its initial state; collections are appended to.
    pub fn merge_from(
        &mut self,
        value: &Account,
    ) -> Result<&mut Self, crate::AccountError> {
        self.set_email(value.email.clone())?;
        self.add_all_roles(value.roles.iter().cloned())?;
        self.add_all_levels(value.levels.iter().cloned())?;
        Ok(self)
    }
    /// Copies every field set on `other`; collections are appended to.
    pub fn merge_from_builder(
        &mut self,
        other: &Self,
    ) -> Result<&mut Self, crate::AccountError> {
        if let Ok(current) = other.email() {
            self.set_email(current.clone())?;
        }
        self.add_all_roles(other.roles.iter().cloned())?;
        if let Some(buffer) = &other.levels {
            self.add_all_levels(buffer.iter().cloned())?;
        }
        Ok(self)
    }
}
impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}
/// A [`Account`] that may be missing required fields, for use in tests. Reading a missing field fails.
#[derive(Debug, Clone)]
pub struct PartialAccount {
    email: Option<String>,
    roles: Vec<String>,
    levels: SortedSet<u8>,
    unset: datatype_gen_support::UnsetFields<1>,
}
impl PartialAccount {
    pub fn email(&self) -> Result<&String, datatype_gen_support::BuildError> {
        self.unset.check_partial(0, "email")?;
        self.email
            .as_ref()
            .ok_or_else(|| datatype_gen_support::BuildError::partial_unset("email"))
    }
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
    pub fn levels(&self) -> &SortedSet<u8> {
        &self.levels
    }
}
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email && self.roles == other.roles
            && self.levels == other.levels
    }
}
impl PartialEq for PartialAccount {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email && self.roles == other.roles
            && self.levels == other.levels && self.unset == other.unset
    }
}
impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!("email={:?}", self.email));
        parts.push(format!("roles={:?}", self.roles));
        parts.push(format!("levels={:?}", self.levels));
        write!(f, "Account{{{}}}", parts.join(", "))
    }
}
impl std::fmt::Display for PartialAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(current) = &self.email {
            parts.push(format!("email={:?}", current));
        }
        parts.push(format!("roles={:?}", self.roles));
        parts.push(format!("levels={:?}", self.levels));
        write!(f, "partial Account{{{}}}", parts.join(", "))
    }
}
