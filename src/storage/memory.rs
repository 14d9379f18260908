use super::*;

/// In-process collection. Documents keep insertion order, which is the
/// "store order" every other operation refers to.
#[derive(Debug, Default, Clone)]
pub struct MemCollection {
    pub data: Vec<Document>,
}

impl MemCollection {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn from_documents(data: Vec<Document>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> ContactIter<'_> {
        ContactIter {
            inner: &self.data,
            idx: 0,
        }
    }

    fn position(&self, filter: &Filter) -> Option<usize> {
        self.data.iter().position(|doc| filter.matches(&doc.contact))
    }
}

pub struct ContactIter<'a> {
    inner: &'a [Document],
    idx: usize,
}

impl<'a> Iterator for ContactIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx].contact;
        self.idx += 1;
        Some(contact)
    }
}

impl DocumentCollection for MemCollection {
    fn insert_one(&mut self, contact: Contact) -> Result<Uuid, AppError> {
        let doc = Document::new(contact);
        let id = doc.id;
        self.data.push(doc);
        Ok(id)
    }

    fn find(&self, filter: &Filter) -> Result<Vec<Contact>, AppError> {
        Ok(self.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    fn update_one(&mut self, filter: &Filter, update: &ContactUpdate) -> Result<bool, AppError> {
        match self.position(filter) {
            Some(index) => {
                update.apply(&mut self.data[index].contact);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_one(&mut self, filter: &Filter) -> Result<bool, AppError> {
        match self.position(filter) {
            Some(index) => {
                self.data.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn flush(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
